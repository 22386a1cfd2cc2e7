use std::fmt;
use std::fs;
use std::path::Path;
use std::ptr;

use opencl3::command_queue::CommandQueue;
use opencl3::device::{Device, CL_DEVICE_TYPE_ALL};
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE};
use opencl3::platform::get_platforms;
use opencl3::program::Program;
use opencl3::types::CL_BLOCKING;
use tracing::debug;

use crate::compute::backend::{pad_batch, ComputeBackend};
use crate::error::{ProcessingError, Result};

/// OpenCL compute engine: device, context, command queue, and the program
/// built from the kernel source file. One engine and one queue are shared
/// by every dispatch in the run; device buffers are scoped to a single
/// `run_kernel` call.
///
/// `Debug` is implemented manually because the OpenCL handle types from
/// `opencl3` don't implement `Debug`.
pub struct OpenClEngine {
    _device: Device,
    context: opencl3::context::Context,
    queue: CommandQueue,
    program: Program,
    platform_name: String,
    device_name: String,
}

impl fmt::Debug for OpenClEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenClEngine")
            .field("platform_name", &self.platform_name)
            .field("device_name", &self.device_name)
            .finish_non_exhaustive()
    }
}

fn cl_err<E: ToString>(err: E) -> ProcessingError {
    ProcessingError::OpenCl(err.to_string())
}

impl OpenClEngine {
    /// Create an engine on the platform/device selected by index and build
    /// the program from `kernel_path`. A failed build surfaces the build
    /// log in the error.
    pub fn new(platform_index: usize, device_index: usize, kernel_path: &Path) -> Result<Self> {
        let platforms = get_platforms().map_err(cl_err)?;
        let platform =
            platforms
                .get(platform_index)
                .ok_or(ProcessingError::PlatformNotFound {
                    index: platform_index,
                    available: platforms.len(),
                })?;

        let device_ids = platform.get_devices(CL_DEVICE_TYPE_ALL).map_err(cl_err)?;
        let device_id = *device_ids
            .get(device_index)
            .ok_or(ProcessingError::DeviceNotFound {
                index: device_index,
                available: device_ids.len(),
            })?;

        let device = Device::new(device_id);
        let platform_name = platform.name().map_err(cl_err)?.trim().to_string();
        let device_name = device.name().map_err(cl_err)?.trim().to_string();

        let context = opencl3::context::Context::from_device(&device).map_err(cl_err)?;

        // The OpenCL 1.2 queue API keeps older runtimes working.
        #[allow(deprecated)]
        let queue = CommandQueue::create_default(&context, 0).map_err(cl_err)?;

        let source = fs::read_to_string(kernel_path)?;
        let program = Program::create_and_build_from_source(&context, &source, "")
            .map_err(|log| ProcessingError::KernelBuild {
                log: log.to_string(),
            })?;

        Ok(Self {
            _device: device,
            context,
            queue,
            program,
            platform_name,
            device_name,
        })
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

impl ComputeBackend for OpenClEngine {
    fn run_kernel(
        &self,
        name: &str,
        batch: &[f32],
        work_group_size: usize,
        pad_value: f32,
    ) -> Result<Vec<f32>> {
        if batch.is_empty() {
            return Err(ProcessingError::EmptyBatch);
        }
        if work_group_size == 0 {
            return Err(ProcessingError::Config(
                "work-group size must be positive".to_string(),
            ));
        }

        let padded = pad_batch(batch, work_group_size, pad_value);
        let element_count = padded.len();

        debug!(
            kernel = name,
            real_len = batch.len(),
            padded_len = element_count,
            groups = element_count / work_group_size,
            "dispatching kernel"
        );

        let mut input_buf = unsafe {
            Buffer::<f32>::create(&self.context, CL_MEM_READ_ONLY, element_count, ptr::null_mut())
                .map_err(cl_err)?
        };
        let mut output_buf = unsafe {
            Buffer::<f32>::create(
                &self.context,
                CL_MEM_READ_WRITE,
                element_count,
                ptr::null_mut(),
            )
            .map_err(cl_err)?
        };

        // Upload the padded batch
        let write_event = unsafe {
            self.queue
                .enqueue_write_buffer(&mut input_buf, CL_BLOCKING, 0, &padded, &[])
                .map_err(cl_err)?
        };
        write_event.wait().map_err(cl_err)?;

        // Output buffer must be zero-initialized before dispatch; kernels
        // accumulate into it.
        let mut output = vec![0.0f32; element_count];
        let fill_event = unsafe {
            self.queue
                .enqueue_write_buffer(&mut output_buf, CL_BLOCKING, 0, &output, &[])
                .map_err(cl_err)?
        };
        fill_event.wait().map_err(cl_err)?;

        let kernel = Kernel::create(&self.program, name)
            .map_err(|_| ProcessingError::UnknownKernel(name.to_string()))?;

        let kernel_event = unsafe {
            ExecuteKernel::new(&kernel)
                .set_arg(&input_buf)
                .set_arg(&output_buf)
                .set_global_work_size(element_count)
                .set_local_work_size(work_group_size)
                .enqueue_nd_range(&self.queue)
                .map_err(cl_err)?
        };
        kernel_event.wait().map_err(cl_err)?;

        // Read back the full padded-length output
        let read_event = unsafe {
            self.queue
                .enqueue_read_buffer(&output_buf, CL_BLOCKING, 0, &mut output, &[])
                .map_err(cl_err)?
        };
        read_event.wait().map_err(cl_err)?;

        Ok(output)
    }
}

/// Render all available platforms and their devices, one per line, for the
/// `-l` flag.
pub fn list_platforms() -> Result<String> {
    let platforms = get_platforms().map_err(cl_err)?;
    let mut listing = String::new();

    for (p_index, platform) in platforms.iter().enumerate() {
        let name = platform.name().map_err(cl_err)?;
        listing.push_str(&format!("Platform {p_index}: {}\n", name.trim()));

        let device_ids = platform.get_devices(CL_DEVICE_TYPE_ALL).map_err(cl_err)?;
        for (d_index, device_id) in device_ids.iter().enumerate() {
            let device = Device::new(*device_id);
            let device_name = device.name().map_err(cl_err)?;
            listing.push_str(&format!("  Device {d_index}: {}\n", device_name.trim()));
        }
    }

    if listing.is_empty() {
        listing.push_str("No OpenCL platforms found\n");
    }

    Ok(listing)
}
