//! Command handlers
//!
//! One invocation is one editing session: the itinerary file is loaded
//! before the command runs and written back after any command that changes
//! the legs. A file with unreadable blocks is never written back, except by
//! an explicit `trip import`.

use std::{fmt::Write as _, path::PathBuf};

use anyhow::{bail, Context, Result};
use log::info;
use roteiro_core::{
    display::{CreateResult, DeleteResult, OperationStatus, Places, UpdateResult},
    params::{Index, ItineraryFile},
    SubmitOutcome, TripPlanner,
};

use crate::{
    cli::{AtLineArgs, PlaceCommands, TripCommands},
    renderer::TerminalRenderer,
};

/// Runs commands against one session and renders their results.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
    itinerary_path: PathBuf,
    /// Blocks of the itinerary file that did not load
    skipped_blocks: usize,
}

impl Cli {
    pub fn new(
        planner: TripPlanner,
        renderer: TerminalRenderer,
        itinerary_path: PathBuf,
        skipped_blocks: usize,
    ) -> Self {
        Self {
            planner,
            renderer,
            itinerary_path,
            skipped_blocks,
        }
    }

    pub async fn handle_trip_command(mut self, command: TripCommands) -> Result<()> {
        if command.rewrites_itinerary() && self.skipped_blocks > 0 {
            bail!(
                "{} has {} blocks without a valid date and time; fix them, or replace the \
                 itinerary with `roteiro trip import`, before changing trips",
                self.itinerary_path.display(),
                self.skipped_blocks
            );
        }
        match command {
            TripCommands::Add(args) => {
                let outcome = self.planner.submit(&args.into()).await?;
                self.render_outcome(outcome);
                self.save()
            }
            TripCommands::Edit(args) => {
                let outcome = self.planner.edit(&args.into()).await?;
                self.render_outcome(outcome);
                self.save()
            }
            TripCommands::List => {
                self.list_trips();
                Ok(())
            }
            TripCommands::Show(args) => {
                let index: Index = args.into();
                let record = self.planner.get(&index)?;
                let mut text = format!("{record}\n");
                if let Some(line) = self.planner.listing().line_of(index.index) {
                    let _ = write!(text, "\nListed from line {line} of `roteiro trip list`.\n");
                }
                self.renderer.render_itinerary(&text);
                Ok(())
            }
            TripCommands::AtLine(args) => self.trip_at_line(&args),
            TripCommands::Remove(args) => {
                let removed = self.planner.remove(&args.into())?;
                self.renderer
                    .render(&DeleteResult::new(removed).to_string());
                self.save()
            }
            TripCommands::Clear(args) => {
                let count = self.planner.clear(&args.into())?;
                self.renderer.render(
                    &OperationStatus::success(format!("Removed {count} trips")).to_string(),
                );
                self.save()
            }
            TripCommands::Export(args) => {
                let file: ItineraryFile = args.into();
                let count = self.planner.export_file(&file)?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Exported {count} trips to {}",
                        file.path.display()
                    ))
                    .to_string(),
                );
                Ok(())
            }
            TripCommands::Import(args) => {
                let file: ItineraryFile = args.into();
                let count = self.planner.import_file(&file)?;
                self.skipped_blocks = 0;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Imported {count} trips from {}",
                        file.path.display()
                    ))
                    .to_string(),
                );
                self.save()
            }
        }
    }

    pub async fn handle_place_command(self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::List => {
                let places = self.planner.list_places().await?;
                self.renderer.render(&Places(places).to_string());
            }
            PlaceCommands::Add(args) => {
                let place = self.planner.add_place(&args.into()).await?;
                self.renderer.render(&CreateResult::new(place).to_string());
            }
            PlaceCommands::Remove(args) => {
                let place = self.planner.remove_place(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(place).to_string());
            }
            PlaceCommands::Seed => {
                let count = self.planner.seed_places().await?;
                self.renderer.render(
                    &OperationStatus::success(format!("The catalog has {count} places"))
                        .to_string(),
                );
            }
            PlaceCommands::Suggest(args) => {
                let names = self.planner.suggest(&args.into());
                if names.is_empty() {
                    self.renderer.render("No matching places.\n");
                } else {
                    let list = names.iter().fold(String::new(), |mut list, name| {
                        let _ = writeln!(list, "- {name}");
                        list
                    });
                    self.renderer.render(&list);
                }
            }
        }
        Ok(())
    }

    /// Prints every leg with a line-number margin for `trip at-line`.
    pub fn list_trips(&self) {
        self.list_legs();
        if self.skipped_blocks > 0 {
            self.renderer.render(
                &OperationStatus::failure(format!(
                    "{} blocks in {} have no valid date and time and are not listed",
                    self.skipped_blocks,
                    self.itinerary_path.display()
                ))
                .to_string(),
            );
        }
    }

    fn list_legs(&self) {
        let listing = self.planner.listing();
        if listing.is_empty() {
            self.renderer.render(&listing.to_string());
            return;
        }
        let text = listing.to_string();
        let numbered = text
            .lines()
            .enumerate()
            .fold(String::new(), |mut out, (i, line)| {
                let _ = writeln!(out, "{:>4}  {line}", i + 1);
                out
            });
        self.renderer.render_itinerary(&numbered);
    }

    fn trip_at_line(&self, args: &AtLineArgs) -> Result<()> {
        let line = args.line.get();
        let Some(index) = self.planner.listing().record_at_line(line) else {
            bail!("Line {line} does not belong to any trip");
        };
        let record = self.planner.get(&Index { index })?;
        self.renderer
            .render_itinerary(&format!("Line {line} is part of trip {}:\n\n{record}\n", index + 1));
        Ok(())
    }

    fn render_outcome(&self, outcome: SubmitOutcome) {
        let text = match outcome.replaced {
            Some(replaced) => UpdateResult::between(&replaced, outcome.record).to_string(),
            None => CreateResult::new(outcome.record).to_string(),
        };
        self.renderer.render_itinerary(&text);
    }

    /// Writes the session's legs back to the itinerary file.
    fn save(&self) -> Result<()> {
        let file = ItineraryFile {
            path: self.itinerary_path.clone(),
        };
        self.planner
            .export_file(&file)
            .with_context(|| format!("Failed to save {}", self.itinerary_path.display()))?;
        info!("Saved itinerary to {}", self.itinerary_path.display());
        Ok(())
    }
}
