use crate::core::prompts::{self, PetTypeSelection, PromptOptions};
use crate::domain::model::CheckInRecord;
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::io::Write;

pub const MENU: &str = "
1) Set pet type
2) Set pet age
3) Set pet name
4) Set days of stay
5) Set amount due
6) Set dog spaces
7) Set cat spaces
8) Show record
0) Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    PetType,
    PetAge,
    PetName,
    DaysStay,
    AmountDue,
    DogSpaces,
    CatSpaces,
    Show,
    Exit,
}

impl MenuChoice {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuChoice::PetType),
            "2" => Some(MenuChoice::PetAge),
            "3" => Some(MenuChoice::PetName),
            "4" => Some(MenuChoice::DaysStay),
            "5" => Some(MenuChoice::AmountDue),
            "6" => Some(MenuChoice::DogSpaces),
            "7" => Some(MenuChoice::CatSpaces),
            "8" => Some(MenuChoice::Show),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Console session around a single check-in record.
///
/// The session owns its input and output for its whole lifetime; both are
/// handed back by `into_parts`, or dropped with the session.
pub struct CheckInSession<I: InputSource, W: Write> {
    record: CheckInRecord,
    input: I,
    out: W,
    options: PromptOptions,
}

impl<I: InputSource, W: Write> CheckInSession<I, W> {
    pub fn new(record: CheckInRecord, input: I, out: W, options: PromptOptions) -> Self {
        Self {
            record,
            input,
            out,
            options,
        }
    }

    pub fn record(&self) -> &CheckInRecord {
        &self.record
    }

    pub fn into_parts(self) -> (CheckInRecord, I, W) {
        (self.record, self.input, self.out)
    }

    /// Runs the menu until `0) Exit`. Closed input or a malformed number ends
    /// the session with an error; an unknown menu option does not.
    pub fn run(&mut self) -> Result<&CheckInRecord> {
        tracing::info!("🐾 Check-in session started");
        writeln!(self.out, "\n🐾 PetCheckIn (Console)")?;

        loop {
            writeln!(self.out, "{}", MENU)?;
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = self.input.read_line()?;
            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::debug!("Unknown menu option {:?}", line);
                writeln!(self.out, "Invalid option.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }
            self.handle(choice)?;
        }

        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        tracing::info!("✅ Check-in session finished for {:?}", self.record.pet_name());
        Ok(&self.record)
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::PetType => {
                let selection = prompts::set_pet_type(
                    &mut self.record,
                    &mut self.input,
                    &mut self.out,
                    &self.options,
                )?;
                if let PetTypeSelection::Rejected(answer) = selection {
                    tracing::debug!("Pet type left as {:?} after {:?}", self.record.pet_type(), answer);
                }
            }
            MenuChoice::PetAge => {
                prompts::set_pet_age(&mut self.record, &mut self.input, &mut self.out, &self.options)?;
            }
            MenuChoice::PetName => {
                prompts::set_pet_name(&mut self.record, &mut self.input, &mut self.out)?;
            }
            MenuChoice::DaysStay => {
                let days = self.ask_int("Days of stay: ")?;
                self.record.set_days_stay(days);
                writeln!(self.out, "Days of stay is {}", days)?;
            }
            MenuChoice::AmountDue => {
                writeln!(self.out, "Amount due: ")?;
                self.out.flush()?;
                let amount = self.input.read_amount()?;
                self.record.set_amount_due(amount);
                writeln!(self.out, "Amount due is ${:.2}", amount)?;
            }
            MenuChoice::DogSpaces => {
                let spaces = self.ask_int("Dog spaces: ")?;
                self.record.set_dog_spaces(spaces);
                writeln!(self.out, "Dog spaces is {}", spaces)?;
            }
            MenuChoice::CatSpaces => {
                let spaces = self.ask_int("Cat spaces: ")?;
                self.record.set_cat_spaces(spaces);
                writeln!(self.out, "Cat spaces is {}", spaces)?;
            }
            MenuChoice::Show => {
                writeln!(self.out, "{}", self.record.summary())?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn ask_int(&mut self, prompt: &str) -> Result<i32> {
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.input.read_int()
    }
}
