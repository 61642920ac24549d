use std::{path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser, Subcommand};
use cli::handlers::{GenerateOptions, handle_generate, handle_inspect};
use console::Style;

#[derive(Parser)]
#[command(name = "kernelgen", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wrappers for every kernel source in a directory
    Generate {
        /// Directory with kernel sources
        src_dir: PathBuf,
        /// Directory the generated Rust files are written to
        #[arg(long)]
        out_dir: PathBuf,
        /// JSON generator configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fail on kernel declarations that do not parse
        #[arg(long)]
        strict: bool,
        /// Reference sources by path instead of embedding them
        #[arg(long)]
        copy_to_output: bool,
        /// Directory referenced sources are copied to
        #[arg(long)]
        asset_dir: Option<PathBuf>,
        /// Module path of the runtime used by the generated code
        #[arg(long)]
        runtime_path: Option<String>,
    },
    /// Print the kernels found in a source file as JSON
    Inspect {
        /// Kernel source file
        file: PathBuf,
        /// Fail on kernel declarations that do not parse
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            src_dir,
            out_dir,
            config,
            strict,
            copy_to_output,
            asset_dir,
            runtime_path,
        }) => handle_generate(GenerateOptions {
            src_dir,
            out_dir,
            config,
            strict,
            copy_to_output,
            asset_dir,
            runtime_path,
        }),
        Some(Commands::Inspect {
            file,
            strict,
        }) => handle_inspect(file, strict),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(Into::into)
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let style_error = Style::new().red().bold();
            eprintln!("{} {error:#}", style_error.apply_to("error:"));
            ExitCode::FAILURE
        },
    }
}
