//! Interactive menu over any line reader and writer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info, instrument, warn};

use crate::codec::Format;
use crate::error::{RegistryError, StorageError};
use crate::model::PayModel;
use crate::registry::{Registry, SortOutcome};
use crate::storage;

const FIRST_NAMES_SHOWN: usize = 5;
const LAST_IDS_SHOWN: usize = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter)]
pub enum MenuAction {
    #[strum(to_string = "Load employees from file")]
    Load = 1,
    #[strum(to_string = "Add a new employee")]
    Add = 2,
    #[strum(to_string = "Sort the list")]
    Sort = 3,
    #[strum(to_string = "Show names of the first 5 employees")]
    FirstNames = 4,
    #[strum(to_string = "Show ids of the last 3 employees")]
    LastIds = 5,
    #[strum(to_string = "Show all employees")]
    ShowAll = 6,
    #[strum(to_string = "Show the average salary")]
    AverageSalary = 7,
    #[strum(to_string = "Save employees to file")]
    Save = 8,
    #[strum(to_string = "Exit")]
    Exit = 9,
}

impl MenuAction {
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(MenuAction::Load),
            2 => Some(MenuAction::Add),
            3 => Some(MenuAction::Sort),
            4 => Some(MenuAction::FirstNames),
            5 => Some(MenuAction::LastIds),
            6 => Some(MenuAction::ShowAll),
            7 => Some(MenuAction::AverageSalary),
            8 => Some(MenuAction::Save),
            9 => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    registry: Registry,
    data_dir: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, data_dir: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            registry,
            data_dir: data_dir.into(),
            input,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        loop {
            self.print_menu()?;
            let Some(action) = self.read_action()? else {
                info!("Input closed");
                return Ok(());
            };
            debug!(%action, "Menu action selected");
            if action == MenuAction::Exit {
                info!("Shell exiting");
                return Ok(());
            }
            if !self.dispatch(action)? {
                info!("Input closed");
                return Ok(());
            }
        }
    }

    /// Returns `false` when input ended part way through the action.
    fn dispatch(&mut self, action: MenuAction) -> Result<bool> {
        match action {
            MenuAction::Load => self.load(),
            MenuAction::Add => self.add(),
            MenuAction::Save => self.save(),
            MenuAction::Sort => self.sort().map(|_| true),
            MenuAction::FirstNames => self.first_names().map(|_| true),
            MenuAction::LastIds => self.last_ids().map(|_| true),
            MenuAction::ShowAll => self.show_all().map(|_| true),
            MenuAction::AverageSalary => self.average_salary().map(|_| true),
            MenuAction::Exit => Ok(false),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMenu:")?;
        for action in MenuAction::iter() {
            writeln!(self.output, "{}. {}", action as u8, action)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Re-prompts until the line is a single digit within `1..=max`.
    fn read_choice(&mut self, max: u8) -> Result<Option<u8>> {
        loop {
            writeln!(self.output, "\nEnter a number from 1 to {max}:")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = match line.as_bytes() {
                [digit @ b'1'..=b'9'] => digit - b'0',
                _ => continue,
            };
            if choice <= max {
                return Ok(Some(choice));
            }
        }
    }

    fn read_action(&mut self) -> Result<Option<MenuAction>> {
        Ok(self.read_choice(9)?.and_then(MenuAction::from_choice))
    }

    fn read_format(&mut self, prompt: &str) -> Result<Option<Format>> {
        writeln!(self.output, "\n{prompt}")?;
        let formats: Vec<Format> = Format::iter().collect();
        for (i, format) in formats.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, format)?;
        }
        let choice = self.read_choice(formats.len() as u8)?;
        Ok(choice.and_then(|c| formats.get(usize::from(c) - 1).copied()))
    }

    fn read_pay_model(&mut self) -> Result<Option<PayModel>> {
        writeln!(self.output, "\nChoose the employee type:")?;
        writeln!(self.output, "1. Fixed salary")?;
        writeln!(self.output, "2. Hourly rate")?;
        Ok(match self.read_choice(2)? {
            Some(1) => Some(PayModel::Fixed),
            Some(_) => Some(PayModel::Hourly),
            None => None,
        })
    }

    fn read_file_name(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "\nEnter the file name:")?;
        self.read_line()
    }

    #[instrument(name = "shell_load", skip(self))]
    fn load(&mut self) -> Result<bool> {
        let Some(format) = self.read_format("Choose the file type to load:")? else {
            return Ok(false);
        };
        let Some(name) = self.read_file_name()? else {
            return Ok(false);
        };

        match storage::load(&self.data_dir, &name, format) {
            Ok(employees) => {
                let count = employees.len();
                match self.registry.replace_all(employees) {
                    Ok(()) => {
                        info!(file = %name, %format, count, "Employees loaded");
                        writeln!(self.output, "Data loaded")?;
                    }
                    Err(e) => {
                        warn!(file = %name, %format, error = %e, "Loaded file rejected");
                        writeln!(self.output, "The file cannot be used: {e}")?;
                    }
                }
            }
            Err(e) => {
                warn!(file = %name, %format, error = %e, "Load failed");
                writeln!(self.output, "{}", describe_load_error(&e))?;
            }
        }
        Ok(true)
    }

    #[instrument(name = "shell_save", skip(self))]
    fn save(&mut self) -> Result<bool> {
        let Some(format) = self.read_format("Choose the file type to save:")? else {
            return Ok(false);
        };
        let Some(name) = self.read_file_name()? else {
            return Ok(false);
        };

        match storage::save(&self.data_dir, &name, format, self.registry.employees()) {
            Ok(path) => {
                info!(path = %path.display(), count = self.registry.len(), "Employees saved");
                writeln!(self.output, "Data saved")?;
            }
            Err(StorageError::InvalidFileName(_)) => {
                warn!(file = %name, "Rejected file name");
                writeln!(self.output, "The file name contains invalid characters")?;
            }
            Err(e) => {
                warn!(file = %name, %format, error = %e, "Save failed");
                writeln!(self.output, "Could not save the file: {e}")?;
            }
        }
        Ok(true)
    }

    #[instrument(name = "shell_add", skip(self))]
    fn add(&mut self) -> Result<bool> {
        let Some(pay_model) = self.read_pay_model()? else {
            return Ok(false);
        };
        let positions = self.registry.catalog().names().collect::<Vec<_>>().join(", ");
        writeln!(
            self.output,
            "\nEnter separated by spaces: id, position, surname, name, patronymic and birthday\n\
             Available positions: {positions}"
        )?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        match self.registry.hire(pay_model, &fields) {
            Ok(employee) => {
                info!(id = employee.id, %pay_model, salary = employee.salary, "Employee added");
                writeln!(self.output, "Employee added")?;
            }
            Err(e) => {
                warn!(%pay_model, error = %e, "Employee rejected");
                writeln!(self.output, "Employee not added: {e}")?;
            }
        }
        Ok(true)
    }

    fn sort(&mut self) -> Result<()> {
        match self.registry.sort() {
            SortOutcome::Sorted => {
                info!(count = self.registry.len(), "Employees sorted");
                writeln!(self.output, "List sorted")?;
            }
            SortOutcome::Empty => writeln!(self.output, "The list is empty")?,
        }
        Ok(())
    }

    fn first_names(&mut self) -> Result<()> {
        match self.registry.top_n_by_name(FIRST_NAMES_SHOWN) {
            Ok(names) => {
                writeln!(self.output, "\nFull names of the first {FIRST_NAMES_SHOWN} employees:\n")?;
                for (i, name) in names.iter().enumerate() {
                    writeln!(self.output, "{}: {}", i + 1, name)?;
                }
            }
            Err(e) => report(&mut self.output, e)?,
        }
        Ok(())
    }

    fn last_ids(&mut self) -> Result<()> {
        match self.registry.bottom_n_by_id(LAST_IDS_SHOWN) {
            Ok(ids) => {
                writeln!(self.output, "\nIds of the last {LAST_IDS_SHOWN} employees:\n")?;
                for (position, id) in ids {
                    writeln!(self.output, "{position}: {id}")?;
                }
            }
            Err(e) => report(&mut self.output, e)?,
        }
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            return report(&mut self.output, RegistryError::Empty);
        }
        for employee in self.registry.employees() {
            writeln!(
                self.output,
                "Id: {}\nFull name: {}\nPosition: {} ({})\nBirthday: {}\nSalary: {}\n",
                employee.id,
                employee.full_name(),
                employee.position,
                employee.pay_model,
                employee.birthday,
                employee.salary
            )?;
        }
        Ok(())
    }

    fn average_salary(&mut self) -> Result<()> {
        match self.registry.average_salary() {
            Ok(average) => writeln!(self.output, "Average salary in the organization: {average}\n")?,
            Err(e) => report(&mut self.output, e)?,
        }
        Ok(())
    }
}

fn report<W: Write>(output: &mut W, error: RegistryError) -> Result<()> {
    let message = match error {
        RegistryError::Empty => "The list is empty",
        RegistryError::InsufficientEmployees { .. } => "Not enough employees",
    };
    writeln!(output, "{message}")?;
    Ok(())
}

fn describe_load_error(error: &StorageError) -> String {
    match error {
        StorageError::NotFound(_) => "The file was not found".to_string(),
        StorageError::Codec(_) => "The file cannot be read".to_string(),
        StorageError::InvalidFileName(_) => "The file name contains invalid characters".to_string(),
        StorageError::Io(e) => format!("Could not read the file: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, MenuAction::Load)]
    #[case(5, MenuAction::LastIds)]
    #[case(9, MenuAction::Exit)]
    fn choices_map_to_actions(#[case] choice: u8, #[case] action: MenuAction) {
        assert_eq!(MenuAction::from_choice(choice), Some(action));
        assert_eq!(action as u8, choice);
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn out_of_range_choices_are_rejected(#[case] choice: u8) {
        assert_eq!(MenuAction::from_choice(choice), None);
    }

    #[test]
    fn menu_lists_nine_actions_in_order() {
        let numbers: Vec<u8> = MenuAction::iter().map(|a| a as u8).collect();

        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }
}
