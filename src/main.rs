use clap::Parser;
use env_logger::{Builder, Env};
use sorting_visualizer::{
    CliArgs, CliController, CliSummary, PpmFrameSequencePresenter, RunOutcome, TextPresenter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let settings = args.settings()?;

    let summary = match &args.output_dir {
        Some(dir) => {
            let presenter =
                PpmFrameSequencePresenter::new(dir, settings.plot_style(), args.width, args.height)?;
            CliController::new(presenter, args.stop_after).run(settings)?
        }
        None => {
            let presenter =
                TextPresenter::new(std::io::stdout().lock()).with_height(args.text_height);
            CliController::new(presenter, args.stop_after).run(settings)?
        }
    };

    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &CliSummary) {
    let verb = match summary.outcome {
        RunOutcome::Completed => "sorted",
        RunOutcome::Cancelled => "stopped",
    };

    println!("{} after {} steps: {:?}", verb, summary.frames, summary.sequence);
}
