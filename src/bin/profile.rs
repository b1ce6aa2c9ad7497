//! CLI for the kernel profiler.
//!
//! Usage:
//!   simd-advantage               # Run all kernels with the defaults
//!   simd-advantage --trials 100  # More trials per kernel
//!   simd-advantage --list        # List kernels
//!   simd-advantage --help        # Show help

use std::env;

use simd_advantage::driver::{run, RunConfig};
use simd_advantage::registry::build_registry;
use simd_advantage::report;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut cfg = RunConfig::default();
    let mut show_list = false;
    let mut show_help = false;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verbose" | "-v" => verbose = true,
            "--trials" => {
                i += 1;
                if i < args.len() {
                    cfg.trials = args[i].parse().unwrap_or(cfg.trials);
                }
            }
            "--length" => {
                i += 1;
                if i < args.len() {
                    cfg.length = args[i].parse().unwrap_or(cfg.length);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    if let Ok(seed) = args[i].parse() {
                        cfg.master_seed = seed;
                    }
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        report::print_help();
        return;
    }

    if show_list {
        report::print_kernel_list(&registry);
        return;
    }

    report::print_header();
    report::print_run_params(&cfg);

    let reports = run(&cfg, &registry);
    report::print_reports(&reports, verbose);
}
