use artgallery::gallery::{
    ClickTarget, EventOutcome, GalleryEvent, GenerateOutcome, GridView, LoadOutcome, ToggleOutcome,
    ViewOutcome,
};
use artgallery::{ColorScheme, GalleryClient, GalleryConfig, MemorySurface};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  recs                 load AI recommendations
  all                  browse all artworks
  like <id>            toggle like on an artwork
  view <id>            open an artwork
  open | close         show or hide the generation dialog
  title <text>         set the dialog's title field
  scheme <name>        set the dialog's color scheme (vibrant, pastel, monochrome, earth)
  generate             submit the generation dialog
  profile              sync liked artworks from the server profile
  export <path>        save the Artsteps export
  html                 print the current page as HTML
  help                 show this text
  quit                 leave";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = GalleryConfig::from_env();
    artgallery::logger::init_with_config(artgallery::logger::LoggerConfig::for_gallery(&config))?;
    artgallery::logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    artgallery::logger::log_config_info(&config);

    let surface = Arc::new(MemorySurface::new());
    let client = match GalleryClient::connect(&config, surface.clone()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize gallery client: {}", e);
            return Err(e.into());
        }
    };

    print_page(&surface);
    client.init().await?;
    print_page(&surface);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, argument) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command {
            "recs" => Some(GalleryEvent::RecommendationsRequested),
            "all" => Some(GalleryEvent::AllArtworksRequested),
            "like" if !argument.is_empty() => {
                Some(GalleryEvent::Click(ClickTarget::LikeButton(argument.to_string())))
            }
            "view" if !argument.is_empty() => {
                Some(GalleryEvent::Click(ClickTarget::Card(argument.to_string())))
            }
            "open" => Some(GalleryEvent::GenerateDialogOpened),
            "close" => Some(GalleryEvent::GenerateDialogClosed),
            "generate" => Some(GalleryEvent::GenerateSubmitted),
            "title" => {
                surface.set_form_title(argument);
                None
            }
            "scheme" => {
                match argument.parse::<ColorScheme>() {
                    Ok(scheme) => surface.set_form_scheme(scheme),
                    Err(e) => println!("{}", e),
                }
                None
            }
            "profile" => {
                match client.sync_likes_from_profile().await {
                    Ok(count) => println!("Synced {} liked artworks", count),
                    Err(e) => println!("Could not read profile: {}", e),
                }
                None
            }
            "export" if !argument.is_empty() => {
                match client.export_artsteps_to(argument).await {
                    Ok(()) => println!("Export written to {}", argument),
                    Err(e) => println!("Export failed: {}", e),
                }
                None
            }
            "html" => {
                println!("{}", surface.snapshot_html());
                None
            }
            "quit" | "exit" => break,
            _ => {
                println!("{}", HELP);
                None
            }
        };

        if let Some(event) = event {
            // Views and likes are fire-and-forget so a slow backend never stalls the prompt.
            if matches!(
                event,
                GalleryEvent::Click(ClickTarget::Card(_) | ClickTarget::LikeButton(_))
            ) {
                let task = client.spawn_dispatch(event);
                tokio::spawn(async move {
                    match task.await {
                        Ok(Ok(outcome)) => report(&outcome),
                        Ok(Err(e)) => log::error!("❌ Click handling failed: {}", e),
                        Err(e) => log::error!("❌ Click task aborted: {}", e),
                    }
                });
            } else {
                let outcome = client.dispatch(event).await?;
                report(&outcome);
                if matches!(outcome, EventOutcome::Loaded(_) | EventOutcome::Generated(_)) {
                    print_page(&surface);
                }
            }
        }

        for alert in surface.take_alerts() {
            println!("[!] {}", alert);
        }
    }

    log::info!("👋 Gallery session closed");
    Ok(())
}

fn report(outcome: &EventOutcome) {
    match outcome {
        EventOutcome::Loaded(LoadOutcome::Failed(reason)) => log::debug!("Load failed: {}", reason),
        EventOutcome::Toggled(ToggleOutcome::InFlight) => println!("Still waiting for the last like"),
        EventOutcome::Toggled(ToggleOutcome::Rejected) => println!("Like was not recorded"),
        EventOutcome::Toggled(state) => println!("{:?}", state),
        EventOutcome::Viewed(ViewOutcome::Failed) => log::debug!("View was not recorded"),
        EventOutcome::Generated(GenerateOutcome::Busy) => println!("Already generating"),
        EventOutcome::ModalShown => println!("Generation dialog open"),
        EventOutcome::ModalHidden => println!("Generation dialog closed"),
        _ => {}
    }
}

fn print_page(surface: &MemorySurface) {
    println!();
    println!("== {} ==", surface.section_title());
    match surface.grid() {
        GridView::Placeholder(text) => println!("   {}", text),
        GridView::Cards(cards) => {
            for card in cards {
                let score = card
                    .score_text
                    .as_deref()
                    .map(|s| format!(" [score {}]", s))
                    .unwrap_or_default();
                println!(
                    "{:>10}  {} by {} ({}){}  {}",
                    card.artwork_id,
                    card.title,
                    card.artist,
                    card.style,
                    score,
                    card.like.label()
                );
                if !card.tags.is_empty() {
                    println!("{:>10}  #{}", "", card.tags.join(" #"));
                }
            }
        }
    }
    println!();
}
