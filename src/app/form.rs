//! Multi-step forms.
//!
//! A form is an ordered run of prompts.  Typing `"menu"` at any step drops
//! the draft and returns [`FormResult::Aborted`]; the `"exit"` sentinel
//! returns [`FormResult::Exit`] from whichever step it was typed at.
//! Nothing is written to the store from here, so an abandoned draft can
//! never be half-committed.

use log::debug;

use super::ports::{Console, ConsoleError};
use super::prompt::{prompt, Reply};
use crate::record::{NewRecord, Record};

/// How a form ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    /// `"menu"` was typed at `step`.
    Aborted { step: &'static str },
    Exit,
}

// ───────────────────────────────────────────────────────────────
// Add-a-dog
// ───────────────────────────────────────────────────────────────

/// Fields of the add-dog form, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Age,
    Breed,
    ImageUrl,
}

impl DraftField {
    pub const ORDER: [Self; 4] = [Self::Name, Self::Age, Self::Breed, Self::ImageUrl];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Breed => "breed",
            Self::ImageUrl => "image url",
        }
    }

    fn question(self) -> &'static str {
        match self {
            Self::Name => "please enter your dog's name ",
            Self::Age => "please enter your dog's age ",
            Self::Breed => "please enter your dog's breed ",
            Self::ImageUrl => "please enter your dog's image url ",
        }
    }
}

/// Fields collected so far.
#[derive(Debug, Default, Clone)]
struct Draft {
    name: String,
    age: Option<String>,
    breed: String,
    image_url: String,
}

impl Draft {
    fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Age => self.age = Some(value).filter(|v| !v.trim().is_empty()),
            DraftField::Breed => self.breed = value,
            DraftField::ImageUrl => self.image_url = value,
        }
    }

    fn into_new_record(self) -> NewRecord {
        NewRecord {
            name: self.name,
            birth_descriptor: self.age,
            breed: self.breed,
            image_url: self.image_url,
        }
    }
}

/// Ask for name, age, breed and image url.  A blank name is asked again.
pub fn collect_new_record(console: &mut impl Console) -> Result<FormResult<NewRecord>, ConsoleError> {
    let mut draft = Draft::default();
    for field in DraftField::ORDER {
        loop {
            let value = match prompt(console, Some(field.question()))? {
                Reply::Exit => return Ok(FormResult::Exit),
                reply if reply.is_menu() => {
                    debug!("Add-dog form aborted at {}", field.label());
                    return Ok(FormResult::Aborted {
                        step: field.label(),
                    });
                }
                Reply::Text(value) => value,
            };
            if field == DraftField::Name && value.trim().is_empty() {
                console.write_line("A dog needs a name.")?;
                continue;
            }
            draft.set(field, value);
            break;
        }
    }
    Ok(FormResult::Completed(draft.into_new_record()))
}

// ───────────────────────────────────────────────────────────────
// Dog picker (walk / feed)
// ───────────────────────────────────────────────────────────────

/// Ask for a 1-based position in `records`.
///
/// Returns `Completed(None)` when the answer is not a valid position; the
/// caller reports that and carries on.
pub fn pick_record<'a>(
    console: &mut impl Console,
    records: &'a [Record],
    question: &str,
) -> Result<FormResult<Option<&'a Record>>, ConsoleError> {
    let answer = match prompt(console, Some(question))? {
        Reply::Exit => return Ok(FormResult::Exit),
        reply if reply.is_menu() => return Ok(FormResult::Aborted { step: "dog number" }),
        Reply::Text(answer) => answer,
    };
    let picked = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| records.get(idx));
    Ok(FormResult::Completed(picked))
}
