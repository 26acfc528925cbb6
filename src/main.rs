use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use hdi_forecast::catalog;
use hdi_forecast::labels;
use hdi_forecast::logging::{log, obj, v_str, Domain, Level};
use hdi_forecast::render::{self, ChartSize};
use hdi_forecast::{Config, Controller, Event, PredictionClient};

const HELP: &str = "\
type text to search, then:
  :pick N   use suggestion N
  :side N   use sidebar entry N
  :list     show the sidebar
  :go       request the forecast
  :quit     exit";

/// One line of user input.
enum Input {
    Text(String),
    Pick(usize),
    Side(usize),
    List,
    Go,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let Some(cmd) = line.strip_prefix(':') else {
        return Some(Input::Text(line.to_string()));
    };
    let mut parts = cmd.split_whitespace();
    match (parts.next(), parts.next().and_then(|n| n.parse().ok())) {
        (Some("pick"), Some(n)) => Some(Input::Pick(n)),
        (Some("side"), Some(n)) => Some(Input::Side(n)),
        (Some("list"), _) => Some(Input::List),
        (Some("go"), _) => Some(Input::Go),
        (Some("help"), _) => Some(Input::Help),
        (Some("quit"), _) | (Some("q"), _) => Some(Input::Quit),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    cfg.validate()?;
    let client = PredictionClient::from_config(&cfg)?;
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[("url", v_str(client.url())), ("msg", v_str("hdi client ready"))]),
    );

    let size = ChartSize { width: cfg.chart_width, height: cfg.chart_height };
    let mut controller = Controller::new(client);

    println!("{}", render::session_view(controller.session(), size, true));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_input(&line) {
            Some(Input::Text(text)) => Event::QueryChanged(text),
            Some(Input::Pick(n)) => Event::SuggestionPicked(n),
            Some(Input::Side(n)) => Event::SidebarPicked(n),
            Some(Input::Go) => {
                if !controller.session().can_submit() {
                    continue;
                }
                println!("{}", labels::SUBMITTING);
                Event::Submit
            }
            Some(Input::List) => {
                println!("{}", labels::SIDEBAR_HEADING);
                for l in render::sidebar_lines(catalog::sidebar()) {
                    println!("{}", l);
                }
                continue;
            }
            Some(Input::Help) | None => {
                println!("{}", HELP);
                continue;
            }
            Some(Input::Quit) => break,
        };

        let session = controller.dispatch(event).await;
        println!("{}", render::session_view(session, size, true));
    }

    log(Level::Info, Domain::System, "shutdown", obj(&[]));
    Ok(())
}
