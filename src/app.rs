use crate::cli::{Cli, Commands};
use lifedash::metrics::{
    DashboardSnapshot, IntegrationsStore, MetricsStore, display_percent, format_hours,
};
use lifedash::{config, ui};
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Summary => handle_summary(),
            Commands::Progress => handle_progress(),
            Commands::Export { output } => handle_export(output),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_default();

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui_with_options(cli.tab.as_deref(), &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_summary() {
    let metrics = MetricsStore::sample();
    let integrations = IntegrationsStore::sample();

    println!("Time Management");
    println!(
        "  Focus {} | Break {} | Productive {} | Distraction {}",
        format_hours(metrics.time_management.focus_time),
        format_hours(metrics.time_management.break_time),
        format_hours(metrics.time_management.productive_hours),
        format_hours(metrics.time_management.distraction_time),
    );

    println!("Skills");
    for skill in &metrics.skills {
        println!(
            "  {} (level {}): {} / {} this week ({}%)",
            skill.name,
            skill.level,
            format_hours(skill.hours_this_week),
            format_hours(skill.target),
            display_percent(skill.percent()),
        );
    }

    println!("Habits");
    for habit in &metrics.habits {
        println!(
            "  {}: {} day streak (goal {})",
            habit.name, habit.streak, habit.target
        );
    }

    println!("Digital Wellbeing");
    println!(
        "  Screen time {}",
        format_hours(metrics.digital_wellbeing.screen_time)
    );
    for app in &metrics.digital_wellbeing.app_usage {
        println!(
            "  {}: {} ({})",
            app.name,
            format_hours(app.hours),
            app.category.label()
        );
    }

    println!("Data Sources");
    for integration in &integrations.integrations {
        let status = if integration.connected {
            "connected"
        } else {
            "not connected"
        };
        println!("  {}: {}", integration.source, status);
    }
}

fn handle_progress() {
    let metrics = MetricsStore::sample();

    println!("{:<14} {:>7} {:>7} {:>7} {:>7}", "Area", "Week 1", "Week 2", "Week 3", "Week 4");
    for row in &metrics.progress_over_time {
        println!(
            "{:<14} {:>6}% {:>6}% {:>6}% {:>6}%",
            row.area, row.weeks[0], row.weeks[1], row.weeks[2], row.weeks[3]
        );
    }
}

fn handle_export(output: Option<std::path::PathBuf>) {
    let snapshot = DashboardSnapshot::sample();

    let json = match snapshot.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing dashboard data: {:#}", e);
            process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &json) {
                eprintln!("Error writing {}: {:#}", path.display(), e);
                process::exit(1);
            }
            println!("Exported dashboard data to {}", path.display());
        }
        None => println!("{}", json),
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}
