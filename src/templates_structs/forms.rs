use askama::Template;

use crate::forms::password::{self, RequirementStatus};
use crate::forms::{ContactRecord, FormState, SignupRecord};
use crate::models::contact_info::{CONTACT_CHANNELS, ContactChannel};
use super::PageContext;

pub const MESSAGE_MAX_CHARS: usize = 1000;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub form: FormState<ContactRecord>,
    pub channels: &'static [ContactChannel],
    pub message_len: usize,
    pub message_max: usize,
}

impl ContactTemplate {
    pub fn new(ctx: PageContext, form: FormState<ContactRecord>) -> Self {
        let message_len = form.values().message.chars().count();
        Self {
            ctx,
            form,
            channels: &CONTACT_CHANNELS,
            message_len,
            message_max: MESSAGE_MAX_CHARS,
        }
    }
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub form: FormState<SignupRecord>,
    /// Checklist state for the (always empty) password input.
    pub requirements: Vec<RequirementStatus>,
}

impl SignupTemplate {
    /// Password inputs are never echoed back, so the checklist starts unmet.
    pub fn new(ctx: PageContext, form: FormState<SignupRecord>) -> Self {
        let requirements = password::evaluate("");
        Self { ctx, form, requirements }
    }
}
