//! Formatted stdout for the CLI.

use terminal_size::{terminal_size, Width};

use crate::driver::{KernelReport, RunConfig};
use crate::kernels::Number;
use crate::measure;
use crate::registry::KernelRegistry;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn print_rule() {
    println!("{}", "─".repeat(get_term_width().min(72)));
}

pub fn print_header() {
    print_rule();
    println!("simd-advantage: cycle cost of three auto-vectorizable kernels");
    print_rule();
}

/// One line per run parameter, so runs can be told apart in scrollback.
pub fn print_run_params(cfg: &RunConfig) {
    println!("trials per kernel: {}", cfg.trials);
    println!("array length:      {}", cfg.length);
    println!("fill range:        [0, {})", cfg.scale);
    println!("axpy coefficient:  {}", cfg.coeff);
    println!("master seed:       {}", cfg.master_seed);
    println!(
        "element width:     {}-bit float",
        std::mem::size_of::<Number>() * 8
    );
    println!("measuring in:      {}", measure::unit_name());
    print_rule();
}

/// Print per-kernel summaries, one line each. With `verbose`, every trial's
/// elapsed ticks and kernel result are listed first.
pub fn print_reports(reports: &[KernelReport], verbose: bool) {
    for report in reports {
        if verbose {
            println!("{} trials:", report.name);
            for (i, (ticks, sample)) in report
                .trial_ticks
                .iter()
                .zip(report.samples.iter())
                .enumerate()
            {
                println!("  trial {:>2}: {:>10} {}, result = {}", i, ticks, measure::unit_name(), sample);
            }
        }
        println!("{}: avg tick runtime: {}", report.name, report.avg_ticks);
    }
}

pub fn print_kernel_list(registry: &KernelRegistry) {
    println!("Available kernels:");
    for kernel in registry.all() {
        println!("  {:<22} {}", kernel.name(), kernel.description());
    }
}

pub fn print_help() {
    println!("simd-advantage - cycle-level profiling of small numeric kernels");
    println!();
    println!("Usage: simd-advantage [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --trials N    Trials per kernel (default 12)");
    println!("  --length N    Sample buffer length (default 16)");
    println!("  --seed N      Master seed (default: wall clock + SEED_OFFSET)");
    println!("  --verbose     Print every trial's ticks and result");
    println!("  --list, -l    List available kernels");
    println!("  --help, -h    Show this help");
    println!();
    println!("Build-time switches:");
    println!("  --features f32          32-bit elements (default 64-bit)");
    println!("  --features unoptimized  defeat the optimizer inside the kernels");
    println!("  --features use_time     wall-clock timing instead of cycle counts");
    println!("  SEED_OFFSET=<n>         compile-time perturbation of the wall-clock seed");
}
