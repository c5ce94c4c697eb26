//! Ratatouille AI: the fridge-scavenger chef
//!
//! Snap a photo of your ingredients, get recipes you can cook right now.
//!
//! Usage:
//!   ratatouille                    - Open the kitchen window
//!   ratatouille detect <image>     - Detect ingredients in a photo
//!   ratatouille recipes <name>...  - Match recipes for ingredients
//!   ratatouille chaos [name]...    - Let the chef pick one at random
//!   ratatouille status             - Check the backend
//!   ratatouille help               - Show help

mod animation;
mod app;
mod backend;
mod commands;
mod config;
mod install;
mod model;
mod session;
mod toast;
mod ui;

use std::env;
use std::path::Path;
use std::process::ExitCode;

use app::Ratatouille;
use backend::{ApiError, BackendClient, ImageUpload};
use commands::Command;
use config::Config;
use iced::{window, Size};
use model::Recipe;
use rand::seq::SliceRandom;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // try_init so a second init (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();
    let config = Config::load();

    match Command::parse(&args[1..]) {
        Command::Open => start_gui(config),
        Command::Help => {
            println!("{}", Command::help_text());
            ExitCode::SUCCESS
        }
        Command::Invalid { message } => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        command => handle_cli_command(command, &config),
    }
}

fn handle_cli_command(command: Command, config: &Config) -> ExitCode {
    let backend = match BackendClient::new(config) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = rt.block_on(async {
        match command {
            Command::Detect { image } => detect(&backend, &image).await,
            Command::Recipes { ingredients } => recipes(&backend, &ingredients).await,
            Command::Chaos { ingredients } => chaos(&backend, &ingredients).await,
            Command::Status => status(&backend).await,
            Command::Open | Command::Help | Command::Invalid { .. } => Ok(()),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("CLI command failed: {:?}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn detect(backend: &BackendClient, image: &Path) -> Result<(), ApiError> {
    let upload = ImageUpload::from_path(image).await?;
    let ingredients = backend.detect_ingredients(upload).await?;

    if ingredients.is_empty() {
        println!("No ingredients detected. Try another photo!");
        return Ok(());
    }
    println!("Detected {} ingredient(s):", ingredients.len());
    for ingredient in &ingredients {
        println!(
            "  {} {:<24} {:>3}%",
            ingredient.icon().glyph(),
            ingredient.name,
            ingredient.confidence_percent()
        );
    }
    Ok(())
}

async fn recipes(backend: &BackendClient, ingredients: &[String]) -> Result<(), ApiError> {
    let matched: Vec<Recipe> = backend
        .fetch_recipes(ingredients)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect();

    if matched.is_empty() {
        println!("No matching recipes found. Try adding ingredients manually.");
        return Ok(());
    }
    for recipe in &matched {
        print_summary(recipe);
    }
    Ok(())
}

async fn chaos(backend: &BackendClient, ingredients: &[String]) -> Result<(), ApiError> {
    let matched = backend.fetch_recipes(ingredients).await?;
    let Some(pick) = matched.choose(&mut rand::thread_rng()).cloned() else {
        println!("Chaos Mode found nothing. Try scanning first.");
        return Ok(());
    };

    let recipe = Recipe::from(pick);
    println!("🎲 Chaos Mode picked:");
    print_summary(&recipe);
    for step in &recipe.steps {
        println!("  {}. {}", step.number, step.instruction);
    }
    Ok(())
}

async fn status(backend: &BackendClient) -> Result<(), ApiError> {
    let message = backend.status().await?;
    println!("Backend at {} is up: {}", backend.base_url(), message);
    Ok(())
}

fn print_summary(recipe: &Recipe) {
    println!("{} ({})", recipe.name, recipe.match_label());
    let (owned, missing): (Vec<_>, Vec<_>) = recipe.ingredients.iter().partition(|i| i.owned);
    if !owned.is_empty() {
        let names: Vec<&str> = owned.iter().map(|i| i.name.as_str()).collect();
        println!("  have:    {}", names.join(", "));
    }
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|i| i.name.as_str()).collect();
        println!("  missing: {}", names.join(", "));
    }
}

fn start_gui(config: Config) -> ExitCode {
    let backend = match BackendClient::new(&config) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Could not create backend client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting Ratatouille AI (backend {})", backend.base_url());

    let result = iced::application(Ratatouille::title, Ratatouille::update, Ratatouille::view)
        .subscription(Ratatouille::subscription)
        .theme(Ratatouille::theme)
        .window(window::Settings {
            size: Size::new(1100.0, 820.0),
            min_size: Some(Size::new(480.0, 600.0)),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Ratatouille::new(config, backend));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Window closed with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
