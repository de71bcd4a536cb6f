use log::debug;
use std::env;

use forkify::{AppConfig, Command, Event, ServingsDirection};

const USAGE: &str = "usage:
  forkify search <query> [page]
  forkify recipe <id> [servings]
  forkify like <id>
  forkify likes";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(USAGE)?;

    let config = AppConfig::load()?;
    debug!("{:#?}", config);
    let (mut state, source) = forkify::open(config)?;
    print_events(&state.dispatch(&source, Command::LoadLikes).await?, false);

    match command.as_str() {
        "search" => {
            let query = args.get(1).ok_or(USAGE)?;
            let page = match args.get(2) {
                Some(p) => p.parse()?,
                None => 1,
            };
            let mut events = state
                .dispatch(&source, Command::Search { query: query.clone() })
                .await?;
            if page != 1 {
                events.extend(state.dispatch(&source, Command::ShowPage { page }).await?);
            }
            print_events(&events, true);
        }
        "recipe" => {
            let id = args.get(1).ok_or(USAGE)?;
            let mut events = state
                .dispatch(&source, Command::LoadRecipe { id: id.clone() })
                .await?;
            let current = state.recipe.as_ref().map(|scaler| scaler.servings());
            if let (Some(target), Some(current)) = (args.get(2), current) {
                let target: u32 = target.parse()?;
                let direction = if target > current {
                    ServingsDirection::Inc
                } else {
                    ServingsDirection::Dec
                };
                for _ in 0..target.abs_diff(current) {
                    events = state
                        .dispatch(&source, Command::UpdateServings(direction))
                        .await?;
                }
            }
            print_events(&events, true);
        }
        "like" => {
            let id = args.get(1).ok_or(USAGE)?;
            state
                .dispatch(&source, Command::LoadRecipe { id: id.clone() })
                .await?;
            if state.recipe.is_none() {
                return Err(format!("could not load recipe {}", id).into());
            }
            print_events(&state.dispatch(&source, Command::ToggleLike).await?, true);
        }
        "likes" => {
            for like in state.likes.likes() {
                println!("{}\t{}\t{}", like.id, like.title, like.author);
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

fn print_events(events: &[Event], verbose: bool) {
    for event in events {
        match event {
            Event::ResultsPage {
                query,
                controls,
                results,
            } => {
                println!(
                    "Results for '{}' (page {}/{})",
                    query, controls.page, controls.pages
                );
                for r in results {
                    println!("  {}\t{}\t{}", r.id, r.title, r.author);
                }
            }
            Event::RecipeReady { recipe, .. } | Event::ServingsUpdated(recipe) => {
                println!(
                    "{} by {} ({} servings, ~{} min)",
                    recipe.title, recipe.author, recipe.servings, recipe.time
                );
                for ing in &recipe.ingredients {
                    match ing.count {
                        Some(count) => {
                            println!("  {:.2} {} {}", count, ing.unit, ing.ingredient)
                        }
                        None => println!("  {}", ing.ingredient),
                    }
                }
            }
            Event::Liked(like) => println!("Liked {}", like.title),
            Event::Unliked { id } => println!("Unliked {}", id),
            Event::Notification(message) => eprintln!("{}", message),
            other if verbose => debug!("{:?}", other),
            _ => {}
        }
    }
}
