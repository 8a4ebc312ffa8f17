//! Message board state: the card list, its count and the empty placeholder.
//!
//! DESIGN
//! ======
//! The count is the length of the card list, so it can never drift from the
//! number of rendered cards. Cards are kept newest first, matching their
//! placement directly after the empty-state marker.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use time::PrimitiveDateTime;

use crate::state::form::MessageFormState;
use crate::util::initials::initials;
use crate::util::markup::RenderMode;
use crate::util::timestamp::format_timestamp;

/// A posted message. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub author: String,
    pub body: String,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct MessageBoard {
    messages: Vec<Message>,
    next_id: u64,
    empty_state_visible: bool,
}

impl MessageBoard {
    /// Page-ready hook: show the empty placeholder if nothing was posted.
    pub fn initialize(&mut self) {
        self.empty_state_visible = self.messages.is_empty();
    }

    /// Record a new message as the first card, bump the count and hide the
    /// placeholder.
    pub fn create_message(&mut self, author: String, body: String, created_at: PrimitiveDateTime) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.insert(0, Message { id, author, body, created_at });
        self.empty_state_visible = false;
        &self.messages[0]
    }

    /// Message form submit: validate `form`, and when it passes post its
    /// trimmed values as a new card and reset the form. Returns whether a
    /// card was created.
    pub fn post(&mut self, form: &mut MessageFormState, now: PrimitiveDateTime) -> bool {
        let Some(submission) = form.submit() else {
            return false;
        };
        self.create_message(submission.author, submission.body, now);
        true
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    /// Messages in display order, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            count_label: count_label(self.count()),
            empty_state_visible: self.empty_state_visible,
            cards: self.messages.iter().map(CardView::from_message).collect(),
        }
    }
}

/// `"1 mensaje"`, otherwise `"N mensajes"`.
pub fn count_label(count: usize) -> String {
    let unit = if count == 1 { "mensaje" } else { "mensajes" };
    format!("{count} {unit}")
}

/// Display model for the whole list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub count_label: String,
    pub empty_state_visible: bool,
    pub cards: Vec<CardView>,
}

/// Display model for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: u64,
    pub initials: String,
    pub author: String,
    pub timestamp: String,
    pub body: String,
}

impl CardView {
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id,
            initials: initials(&message.author),
            author: message.author.clone(),
            timestamp: format_timestamp(message.created_at),
            body: message.body.clone(),
        }
    }

    /// Inner markup of a `.message-card` element.
    pub fn markup(&self, mode: RenderMode) -> String {
        format!(
            concat!(
                r#"<div class="message-card__header">"#,
                r#"<div class="message-card__user">"#,
                r#"<div class="message-card__avatar">{initials}</div>"#,
                r#"<span class="message-card__username">{author}</span>"#,
                "</div>",
                r#"<span class="message-card__timestamp">{timestamp}</span>"#,
                "</div>",
                r#"<div class="message-card__content">{body}</div>"#,
            ),
            initials = mode.apply(&self.initials),
            author = mode.apply(&self.author),
            timestamp = self.timestamp,
            body = mode.apply(&self.body),
        )
    }
}
