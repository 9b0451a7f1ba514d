//! Interactive menu over a [`Catalog`].
//!
//! The session owns the catalog for the lifetime of the process. It turns
//! 1-based user numbers into 0-based indices and resolves "blank keeps the
//! current value" before calling the catalog; the catalog itself does no
//! merging.

pub mod prompt;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use taxa_core::responses::SpeciesDetail;
use taxa_core::{Catalog, SPECIES_NOT_FOUND, SpeciesType, Variant};

use crate::cli::OutputFormat;
use crate::output::render;
use prompt::Prompter;

const WELCOME: &str = "Welcome to the Taxa Species Management System";
const FAREWELL: &str = "Thank you for using the Species Management System";
const EMPTY_CATALOG: &str = "No species registered yet.";

/// Result of one menu step: keep going or stop (exit chosen or input ended).
type Step = anyhow::Result<ControlFlow<()>>;

/// Session behaviour that does not come from the input stream.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub show_banner: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_banner: true,
        }
    }
}

pub struct Session<R, W> {
    catalog: Catalog,
    io: Prompter<R, W>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(catalog: Catalog, reader: R, writer: W, options: SessionOptions) -> Self {
        Self {
            catalog,
            io: Prompter::new(reader, writer),
            options,
        }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Hand back the catalog and the output sink.
    #[cfg(test)]
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.io.into_writer())
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.options.show_banner {
            self.io.say(WELCOME)?;
        }

        while self.main_menu()?.is_continue() {}

        if self.options.show_banner {
            self.io.say(FAREWELL)?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> Step {
        self.io.say("\nPlease select an option:")?;
        self.io.say("1. Register a Species")?;
        self.io.say("2. Edit a Species")?;
        self.io.say("3. Delete a Species")?;
        self.io.say("4. Show Species Information")?;
        self.io.say("0. Exit")?;

        let Some(option) = self.io.ask_int("")? else {
            return Ok(ControlFlow::Break(()));
        };

        match option {
            1 => self.register_species(),
            2 => self.edit_species(),
            3 => self.delete_species(),
            4 => self.show_species(),
            0 => Ok(ControlFlow::Break(())),
            _ => {
                self.io.say("Invalid option. Please try again.")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn register_species(&mut self) -> Step {
        self.io.say("\nSelect species type:")?;
        self.io.say("Flora Types:")?;
        for (choice, species_type) in (1..).zip(SpeciesType::ALL) {
            if choice == 3 {
                self.io.say("\nFauna Types:")?;
            }
            self.io.say(format!("{choice}. {}", species_type.label()))?;
        }

        let Some(choice) = self.io.ask_int("")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(name) = self.io.ask_text("Enter species name:")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(scientific_name) = self.io.ask_text("Enter scientific name:")? else {
            return Ok(ControlFlow::Break(()));
        };

        let Some(species_type) = SpeciesType::from_menu_choice(choice) else {
            self.io.say("Invalid species type selected.")?;
            return Ok(ControlFlow::Continue(()));
        };

        let registered = match species_type.variant() {
            Variant::Flora => {
                let Some(has_flowers) = self.io.ask_bool("Does it have flowers? (true/false):")?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(has_fruits) = self.io.ask_bool("Does it have fruits? (true/false):")?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(max_height) = self.io.ask_measure("Enter maximum height (in meters):")?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                self.catalog.register_flora(
                    &name,
                    &scientific_name,
                    species_type,
                    has_flowers,
                    has_fruits,
                    max_height,
                )
            }
            Variant::Fauna => {
                let Some(is_migratory) = self.io.ask_bool("Is it migratory? (true/false):")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(max_weight) = self.io.ask_measure("Enter maximum weight (in kg):")? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.catalog.register_fauna(
                    &name,
                    &scientific_name,
                    species_type,
                    is_migratory,
                    max_weight,
                )
            }
        };

        if registered {
            self.io.say("Species registered successfully!")?;
        } else {
            self.io
                .say("Error: Could not register species. The catalog might be full.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn edit_species(&mut self) -> Step {
        if !self.print_listing()? {
            return Ok(ControlFlow::Continue(()));
        }

        let Some(number) = self.io.ask_int("\nEnter the number of the species to edit:")? else {
            return Ok(ControlFlow::Break(()));
        };

        let current = to_index(number).and_then(|index| {
            let name = self.catalog.species_name(index)?.to_string();
            let scientific_name = self.catalog.species_scientific_name(index)?.to_string();
            Some((index, name, scientific_name))
        });
        let Some((index, current_name, current_scientific_name)) = current else {
            self.io.say("Error: Invalid species index selected.")?;
            return Ok(ControlFlow::Continue(()));
        };

        self.io.say(format!("Current name: {current_name}"))?;
        let Some(new_name) = self
            .io
            .ask_text("Enter new name (or press Enter to keep current):")?
        else {
            return Ok(ControlFlow::Break(()));
        };

        self.io
            .say(format!("Current scientific name: {current_scientific_name}"))?;
        let Some(new_scientific_name) = self
            .io
            .ask_text("Enter new scientific name (or press Enter to keep current):")?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let final_name = keep_if_blank(new_name, current_name);
        let final_scientific_name = keep_if_blank(new_scientific_name, current_scientific_name);

        if self
            .catalog
            .edit_species(index, &final_name, &final_scientific_name)
        {
            self.io.say("Species updated successfully!")?;
        } else {
            self.io
                .say("Error: Could not update species. Please try again.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete_species(&mut self) -> Step {
        if !self.print_listing()? {
            return Ok(ControlFlow::Continue(()));
        }

        let Some(number) = self
            .io
            .ask_int("\nEnter the number of the species to delete:")?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let deleted = to_index(number).is_some_and(|index| self.catalog.delete_species(index));
        if deleted {
            self.io.say("Species deleted successfully!")?;
        } else {
            self.io
                .say("Error: Could not delete species. Invalid index.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn show_species(&mut self) -> Step {
        if !self.print_listing()? {
            return Ok(ControlFlow::Continue(()));
        }

        let Some(number) = self.io.ask_int("\nEnter the number of the species to view:")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.io.say("\nSpecies Information:")?;
        let rendered = match (self.options.format, to_index(number)) {
            (OutputFormat::Text, Some(index)) => self.catalog.species_info(index),
            (format, Some(index)) => match self.catalog.get(index) {
                Some(species) => render(
                    &SpeciesDetail {
                        position: index + 1,
                        species,
                    },
                    format,
                )?,
                None => SPECIES_NOT_FOUND.to_string(),
            },
            (_, None) => SPECIES_NOT_FOUND.to_string(),
        };
        self.io.say(rendered)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Print the current listing. Returns `false` (after saying so) when the
    /// catalog is empty.
    fn print_listing(&mut self) -> anyhow::Result<bool> {
        if self.catalog.is_empty() {
            self.io.say(EMPTY_CATALOG)?;
            return Ok(false);
        }

        self.io.say("Current species list:")?;
        let listing = match self.options.format {
            OutputFormat::Text => self.catalog.species_list(),
            format => render(&self.catalog.entries(), format)?,
        };
        self.io.say(listing)?;
        Ok(true)
    }
}

/// Translate a 1-based user number to a 0-based index. `None` for zero or less.
fn to_index(number: i64) -> Option<usize> {
    usize::try_from(number).ok()?.checked_sub(1)
}

fn keep_if_blank(input: String, current: String) -> String {
    if input.is_empty() { current } else { input }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_script(catalog: Catalog, script: &str, format: OutputFormat) -> (Catalog, String) {
        let options = SessionOptions {
            format,
            show_banner: true,
        };
        let mut session = Session::new(catalog, script.as_bytes(), Vec::new(), options);
        session.run().expect("session should run");
        let (catalog, out) = session.into_parts();
        (catalog, String::from_utf8(out).expect("utf-8 output"))
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        assert!(catalog.register_flora("Ceiba", "Ceiba pentandra", SpeciesType::LandFlora, true, true, 70.0));
        assert!(catalog.register_fauna("Tucán", "Ramphastos", SpeciesType::Bird, false, 0.6));
        catalog
    }

    #[test]
    fn user_numbers_map_to_zero_based_indices() {
        assert_eq!(to_index(1), Some(0));
        assert_eq!(to_index(80), Some(79));
        assert_eq!(to_index(0), None);
        assert_eq!(to_index(-3), None);
    }

    #[test]
    fn blank_input_keeps_current_value() {
        assert_eq!(keep_if_blank(String::new(), "Ceiba".into()), "Ceiba");
        assert_eq!(keep_if_blank("Ceibo".into(), "Ceiba".into()), "Ceibo");
    }

    #[test]
    fn exit_prints_banner_lines() {
        let (_, out) = run_script(Catalog::new(), "0\n", OutputFormat::Text);
        assert!(out.starts_with(WELCOME));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (catalog, out) = run_script(Catalog::new(), "", OutputFormat::Text);
        assert!(catalog.is_empty());
        assert!(out.contains(FAREWELL));
    }

    #[test]
    fn banner_can_be_disabled() {
        let options = SessionOptions {
            format: OutputFormat::Text,
            show_banner: false,
        };
        let mut session = Session::new(Catalog::new(), "0\n".as_bytes(), Vec::new(), options);
        session.run().unwrap();
        let (_, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains(WELCOME));
        assert!(!out.contains(FAREWELL));
    }

    #[test]
    fn registers_flora_from_menu() {
        let script = "1\n1\nCeiba\nCeiba pentandra\ntrue\nfalse\n70\n0\n";
        let (catalog, out) = run_script(Catalog::new(), script, OutputFormat::Text);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.species_name(0), Some("Ceiba"));
        assert!(catalog.species_info(0).contains("Max Height: 70.00 meters"));
        assert!(out.contains("Species registered successfully!"));
    }

    #[test]
    fn registers_fauna_after_reprompting_bad_values() {
        let script = "1\n3\nGavilán\nButeo sp.\nmaybe\ntrue\nheavy\n1.2\n0\n";
        let (catalog, out) = run_script(Catalog::new(), script, OutputFormat::Text);

        assert_eq!(catalog.len(), 1);
        let info = catalog.species_info(0);
        assert!(info.contains("Is Migratory: true"));
        assert!(info.contains("Max Weight: 1.2 kg"));
        assert!(out.contains("Please answer true or false."));
        assert!(out.contains("Please enter a non-negative number."));
    }

    #[test]
    fn undecodable_answer_does_not_end_the_session() {
        let mut script = b"1\n3\nGavil\xc3\xa1n\nButeo sp.\n".to_vec();
        script.extend_from_slice(b"\xff\xfe\ntrue\n1.2\n0\n");

        let options = SessionOptions::default();
        let mut session = Session::new(Catalog::new(), &script[..], Vec::new(), options);
        session.run().expect("garbled input must not be fatal");
        let (catalog, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.species_name(0), Some("Gavilán"));
        assert!(catalog.species_info(0).contains("Is Migratory: true"));
        assert!(out.contains("Please answer true or false."));
        assert!(out.contains("Species registered successfully!"));
    }

    #[test]
    fn invalid_type_choice_aborts_registration() {
        let script = "1\n9\nHongo\nFungi\n0\n";
        let (catalog, out) = run_script(Catalog::new(), script, OutputFormat::Text);
        assert!(catalog.is_empty());
        assert!(out.contains("Invalid species type selected."));
    }

    #[test]
    fn full_catalog_reports_registration_failure() {
        let mut catalog = Catalog::with_capacity(1);
        assert!(catalog.register_fauna("Danta", "Tapirus", SpeciesType::Mammal, false, 300.0));

        let script = "1\n4\nZorro\nCerdocyon thous\nfalse\n6\n0\n";
        let (catalog, out) = run_script(catalog, script, OutputFormat::Text);
        assert_eq!(catalog.len(), 1);
        assert!(out.contains("Error: Could not register species. The catalog might be full."));
    }

    #[test]
    fn edit_with_blank_scientific_name_keeps_it() {
        let script = "2\n1\nCeiba blanca\n\n0\n";
        let (catalog, out) = run_script(seeded(), script, OutputFormat::Text);

        assert_eq!(catalog.species_name(0), Some("Ceiba blanca"));
        assert_eq!(catalog.species_scientific_name(0), Some("Ceiba pentandra"));
        assert!(out.contains("Current species list:\n1. Ceiba\n2. Tucán"));
        assert!(out.contains("Species updated successfully!"));
    }

    #[test]
    fn edit_with_invalid_number_changes_nothing() {
        let script = "2\n5\n0\n";
        let (catalog, out) = run_script(seeded(), script, OutputFormat::Text);
        assert_eq!(catalog.species_list(), "1. Ceiba\n2. Tucán");
        assert!(out.contains("Error: Invalid species index selected."));
    }

    #[test]
    fn edit_on_empty_catalog_says_so() {
        let (_, out) = run_script(Catalog::new(), "2\n0\n", OutputFormat::Text);
        assert!(out.contains(EMPTY_CATALOG));
    }

    #[test]
    fn delete_shifts_remaining_entries() {
        let (catalog, out) = run_script(seeded(), "3\n1\n0\n", OutputFormat::Text);
        assert_eq!(catalog.species_list(), "1. Tucán");
        assert!(out.contains("Species deleted successfully!"));
    }

    #[test]
    fn delete_zero_is_rejected_without_touching_catalog() {
        let (catalog, out) = run_script(seeded(), "3\n0\n0\n", OutputFormat::Text);
        assert_eq!(catalog.len(), 2);
        assert!(out.contains("Error: Could not delete species. Invalid index."));
    }

    #[test]
    fn show_prints_species_info() {
        let (_, out) = run_script(seeded(), "4\n2\n0\n", OutputFormat::Text);
        assert!(out.contains("Species Information:\nFauna - Type: Bird\nName: Tucán"));
    }

    #[test]
    fn show_out_of_range_prints_not_found() {
        let (_, out) = run_script(seeded(), "4\n7\n0\n", OutputFormat::Text);
        assert!(out.contains(SPECIES_NOT_FOUND));
    }

    #[test]
    fn json_format_renders_listing_and_detail() {
        let (_, out) = run_script(seeded(), "4\n1\n0\n", OutputFormat::Raw);
        assert!(out.contains(r#"{"position":1,"name":"Ceiba","scientific_name":"Ceiba pentandra","species_type":"land_flora"}"#));
        assert!(out.contains(r#""species_type":"land_flora","traits":{"variant":"flora""#));
    }

    #[test]
    fn unknown_option_is_reported() {
        let (_, out) = run_script(Catalog::new(), "7\n0\n", OutputFormat::Text);
        assert!(out.contains("Invalid option. Please try again."));
    }
}
