//! The three-phase batch pipeline: pre-load (serial) / measured compute
//! (parallel, atomic task dispatch, no I/O or allocation) / post-write
//! (serial). `start_compression` and `start_decompression` share this
//! skeleton but differ in what Phase 1 loads and Phase 3 writes.

use std::cell::UnsafeCell;
use std::path::Path;
use std::time::Instant;

use crate::batch::task::{Task, TaskState};
use crate::codec::select_backend;
use crate::config::{COMPRESS_EXTENSIONS, CONTAINER_EXTENSION};
use crate::container;
use crate::error::PixzError;
use crate::raster;
use crate::util::file_list;

/// Wraps a `Task` in an `UnsafeCell` so a fixed set of worker threads can
/// each mutate a disjoint element of the same `Vec` without a lock.
///
/// Safety: callers must only call `get_mut` for indices that no other
/// thread is concurrently touching. `WorkerPool::dispatch_each`'s atomic
/// fetch-add guarantees exactly that — each index is claimed by exactly one
/// worker, exactly once.
struct TaskCell(UnsafeCell<Task>);
unsafe impl Sync for TaskCell {}

impl TaskCell {
    fn new(task: Task) -> Self {
        TaskCell(UnsafeCell::new(task))
    }

    #[allow(clippy::mut_from_ref)]
    unsafe fn get_mut(&self) -> &mut Task {
        &mut *self.0.get()
    }

    fn into_inner(self) -> Task {
        self.0.into_inner()
    }
}

/// Compresses every supported image directly inside `source_dir` into
/// `<output_dir>/<stem>.lz77` containers. Returns the Phase-2 wall-clock
/// elapsed time in milliseconds.
pub fn start_compression(
    source_dir: &Path,
    output_dir: &Path,
    use_asm: bool,
    num_threads: usize,
    mut progress_cb: impl FnMut(i32),
    mut log_cb: impl FnMut(&str),
) -> Result<u64, PixzError> {
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        log_cb(&format!("could not create output directory: {e}"));
        progress_cb(100);
        return Ok(0);
    }

    // Phase 1 — pre-load (serial).
    let paths = match file_list::list_by_extension(source_dir, COMPRESS_EXTENSIONS) {
        Ok(paths) => paths,
        Err(e) => {
            log_cb(&format!("could not enumerate {}: {e}", source_dir.display()));
            progress_cb(100);
            return Ok(0);
        }
    };
    let tasks: Vec<TaskCell> = paths
        .into_iter()
        .map(|path| {
            TaskCell::new(match raster::load_pixels(&path) {
                Ok((w, h, pixels)) => Task::for_compress(path, w, h, pixels),
                Err(e) => Task::failed_compress(path, e),
            })
        })
        .collect();

    // Phase 2 — measured (parallel, no I/O, no allocation, no logging).
    let backend = select_backend(use_asm);
    let pool = crate::threadpool::WorkerPool::new(num_threads.max(1));
    let start = Instant::now();
    pool.dispatch_each(tasks.len(), |i| {
        let task = unsafe { tasks[i].get_mut() };
        if !task.load_ok {
            return;
        }
        match backend.compress(&task.pixels, &mut task.out_tokens, Some(&mut task.work)) {
            Ok(n) => {
                task.out_len = n;
                task.state = if n == 0 {
                    TaskState::Empty
                } else {
                    TaskState::Computed
                };
            }
            Err(e) => {
                task.exception = Some(e);
                task.state = TaskState::Exception;
            }
        }
    });
    let elapsed_ms = start.elapsed().as_millis() as u64;

    // Phase 3 — post-write (serial, original enumeration order).
    let total = tasks.len();
    for (i, cell) in tasks.into_iter().enumerate() {
        let mut task = cell.into_inner();
        match task.state {
            TaskState::Pending => {
                log_cb(&format!(
                    "skip {}: {}",
                    task.stem,
                    task.exception
                        .as_ref()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "load failed".to_string())
                ));
                task.state = TaskState::Skipped;
            }
            TaskState::Exception => {
                log_cb(&format!(
                    "skip {}: {}",
                    task.stem,
                    task.exception.as_ref().map(|e| e.to_string()).unwrap_or_default()
                ));
                task.state = TaskState::Skipped;
            }
            TaskState::Computed | TaskState::Empty => {
                let out_path = output_dir.join(format!("{}.{}", task.stem, CONTAINER_EXTENSION));
                match container::write_container(&out_path, task.width, task.height, &task.out_tokens[..task.out_len]) {
                    Ok(()) => {
                        log_cb(&format!("wrote {}", out_path.display()));
                        task.state = TaskState::Written;
                    }
                    Err(e) => {
                        log_cb(&format!("skip {}: {}", task.stem, e));
                        task.state = TaskState::Skipped;
                    }
                }
            }
            TaskState::Loaded | TaskState::Written | TaskState::Skipped => unreachable!(
                "Phase 2 always leaves a task Pending, Computed, Exception or Empty"
            ),
        }
        progress_cb((((i + 1) * 100) / total.max(1)) as i32);
    }

    log_cb(&format!("compressed {} file(s) in {} ms", total, elapsed_ms));
    progress_cb(100);
    Ok(elapsed_ms)
}

/// Decompresses every `.lz77` container directly inside `source_dir` into
/// `<output_dir>/<stem>.bmp` bitmaps. Returns the Phase-2 wall-clock elapsed
/// time in milliseconds.
pub fn start_decompression(
    source_dir: &Path,
    output_dir: &Path,
    use_asm: bool,
    num_threads: usize,
    mut progress_cb: impl FnMut(i32),
    mut log_cb: impl FnMut(&str),
) -> Result<u64, PixzError> {
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        log_cb(&format!("could not create output directory: {e}"));
        progress_cb(100);
        return Ok(0);
    }

    // Phase 1 — pre-load (serial).
    let paths = match file_list::list_by_extension(source_dir, &[CONTAINER_EXTENSION]) {
        Ok(paths) => paths,
        Err(e) => {
            log_cb(&format!("could not enumerate {}: {e}", source_dir.display()));
            progress_cb(100);
            return Ok(0);
        }
    };
    let tasks: Vec<TaskCell> = paths
        .into_iter()
        .map(|path| {
            TaskCell::new(match container::read_container(&path) {
                Ok((header, payload)) => {
                    Task::for_decompress(path, header.width, header.height, payload)
                }
                Err(e) => Task::failed_decompress(path, e),
            })
        })
        .collect();

    // Phase 2 — measured (parallel, no I/O, no allocation, no logging).
    let backend = select_backend(use_asm);
    let pool = crate::threadpool::WorkerPool::new(num_threads.max(1));
    let start = Instant::now();
    pool.dispatch_each(tasks.len(), |i| {
        let task = unsafe { tasks[i].get_mut() };
        if !task.load_ok {
            return;
        }
        match backend.decompress(&task.token_payload, &mut task.out_pixels) {
            Ok(n) => {
                task.out_len = n;
                task.state = if n == 0 {
                    TaskState::Empty
                } else {
                    TaskState::Computed
                };
            }
            Err(e) => {
                task.exception = Some(e);
                task.state = TaskState::Exception;
            }
        }
    });
    let elapsed_ms = start.elapsed().as_millis() as u64;

    // Phase 3 — post-write (serial, original enumeration order).
    let total = tasks.len();
    for (i, cell) in tasks.into_iter().enumerate() {
        let mut task = cell.into_inner();
        let pixel_count = task.width as usize * task.height as usize;
        match task.state {
            TaskState::Pending => {
                log_cb(&format!(
                    "skip {}: {}",
                    task.stem,
                    task.exception.as_ref().map(|e| e.to_string()).unwrap_or_default()
                ));
                task.state = TaskState::Skipped;
            }
            TaskState::Exception => {
                log_cb(&format!(
                    "skip {}: {}",
                    task.stem,
                    task.exception.as_ref().map(|e| e.to_string()).unwrap_or_default()
                ));
                task.state = TaskState::Skipped;
            }
            TaskState::Computed | TaskState::Empty if task.out_len != pixel_count => {
                log_cb(&format!(
                    "skip {}: decoded {} pixels, expected {}",
                    task.stem, task.out_len, pixel_count
                ));
                task.state = TaskState::Skipped;
            }
            TaskState::Computed | TaskState::Empty => {
                let out_path = output_dir.join(format!("{}.bmp", task.stem));
                match raster::save_bitmap(&out_path, task.width, task.height, &task.out_pixels) {
                    Ok(()) => {
                        log_cb(&format!("wrote {}", out_path.display()));
                        task.state = TaskState::Written;
                    }
                    Err(e) => {
                        log_cb(&format!("skip {}: {}", task.stem, e));
                        task.state = TaskState::Skipped;
                    }
                }
            }
            TaskState::Loaded | TaskState::Written | TaskState::Skipped => unreachable!(
                "Phase 2 always leaves a task Pending, Computed, Exception or Empty"
            ),
        }
        progress_cb((((i + 1) * 100) / total.max(1)) as i32);
    }

    log_cb(&format!("decompressed {} file(s) in {} ms", total, elapsed_ms));
    progress_cb(100);
    Ok(elapsed_ms)
}
