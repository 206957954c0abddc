//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! locale-cal           // Current month
//! locale-cal 02.2014   // February 2014
//! ```

use locale_cal::args::Args;
use locale_cal::error::CalError;
use locale_cal::formatter::print_month;
use locale_cal::logging;
use locale_cal::types::CalContext;
use tracing::info;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let ctx = CalContext::new(args)?;
    info!(
        month = ctx.request.month,
        year = ctx.request.year,
        first_day_of_week = ctx.request.first_day_of_week,
        today = ?ctx.today,
        "printing calendar"
    );

    print_month(&ctx);

    Ok(())
}
