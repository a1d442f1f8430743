use clap::Parser;
use seedgen::args::GenerateArgs;
use std::process::exit;

/// Write uniformly random points on a square integer grid to a CSV file.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
  #[command(flatten)]
  args: GenerateArgs,
}

fn main() {
  // stdout only carries the final result line.
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      // Usage errors exit with 1 rather than clap's 2.
      let code = if err.use_stderr() { 1 } else { 0 };
      let _ = err.print();
      exit(code);
    }
  };

  match cli.args.exec() {
    Ok(path) => println!("seeds written to {}", path.display()),
    Err(err) => {
      eprintln!("error: {err}");
      exit(1);
    }
  }
}
