//! ptype-shim CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use ptype_calc::CalculatorConfig;
use ptype_cli::commands::{CalcOp, ReportFormat, run_calc, run_infer, run_load};
use ptype_cli::logging::{LogConfig, LogFormat, init_logging};
use ptype_infer::InferenceOptions;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{
    CalcArgs, CalcOpArg, Cli, Command, InferArgs, LogFormatArg, LogLevelArg, ReportFormatArg,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Calc(args) => run_calc(calculator_config(args), calc_op(args)).map(|value| {
            println!("{value}");
        }),
        Command::Load(args) => run_load(&args.csv, &args.columns, args.mode).map(|df| {
            println!("{df}");
        }),
        Command::Infer(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_infer(
                &args.csv,
                &args.columns,
                args.mode,
                &inference_options(args),
                report_format(args.format),
                &mut out,
            )
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn calculator_config(args: &CalcArgs) -> CalculatorConfig {
    CalculatorConfig {
        use_degrees: args.degrees,
        round_to_integer: args.integers,
    }
}

fn calc_op(args: &CalcArgs) -> CalcOp {
    match args.op {
        CalcOpArg::Add { a, b } => CalcOp::Add(a, b),
        CalcOpArg::Div { a, b } => CalcOp::Div(a, b),
        CalcOpArg::Tan { value } => CalcOp::Tan(value),
    }
}

fn inference_options(args: &InferArgs) -> InferenceOptions {
    let mut options = InferenceOptions::default();
    if let Some(max) = args.max_categories {
        options = options.with_max_categories(max);
    }
    if let Some(limit) = args.sample_limit {
        options = options.with_sample_limit(limit);
    }
    options
}

fn report_format(arg: ReportFormatArg) -> ReportFormat {
    match arg {
        ReportFormatArg::Table => ReportFormat::Table,
        ReportFormatArg::Json => ReportFormat::Json,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
