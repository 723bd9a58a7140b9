use anyhow::{Result, bail};
use clap::Parser;
use flowscope::cli::Args;
use flowscope::flow::filter::FlowFilter;
use flowscope::i18n::Passthrough;
use flowscope::loader::read_flows;
use flowscope::logging::{self, LoggingGuard};
use flowscope::overview::default_overview_panels_for;
use flowscope::report::{render_panels, render_table};
use flowscope::table::{NetflowTable, TableInput, default_columns};
use flowscope::tui::{self, TuiConfig};
use tracing::{error, info, warn};

fn main() {
    let args = Args::parse();

    let _guard = match logging::init_logging(&args.log_target(), args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:?}");
            LoggingGuard::none()
        }
    };

    if let Err(e) = run(args) {
        error!(error = ?e, "flowscope exited with an error");
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let translator = Passthrough;
    let panels = default_overview_panels_for(&args.feature_gate());

    if args.panels {
        let limit = args.limit.as_deref();
        print!("{}", render_panels(&translator, &panels, limit, &args.metric));
    }

    let Some(path) = args.flows.clone() else {
        if args.panels {
            return Ok(());
        }
        bail!("No flow file given; pass a JSON-lines flow export or --panels");
    };

    if args.tui {
        return tui::run_tui(TuiConfig {
            path,
            panels,
            sort: args.sort_state(),
            filter: args.filter.clone(),
            limit: args.limit.clone(),
            metric: args.metric.clone(),
        });
    }

    info!(path = ?path, "Loading flows");
    let (flows, load_error) = match read_flows(&path, |_| {}) {
        Ok(flows) => (flows, None),
        Err(e) => {
            warn!(error = %e, "Flow load failed");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let visible = FlowFilter::new(&args.filter).apply(&flows);
    let columns = default_columns();
    let table = NetflowTable::with_sort(args.sort_state());
    let clear = || info!("Clear filters requested; rerun without --filter");
    let input = TableInput::new(&visible, &columns, &clear).error(load_error.as_deref());
    let body = table.body(input);
    info!(state = body.kind(), flows = flows.len(), visible = visible.len(), "Rendering flow table");

    print!(
        "{}",
        render_table(&translator, &table.header(&columns), &body, &columns)
    );
    Ok(())
}
