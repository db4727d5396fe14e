//! Form session: binds every signup field and dispatches host events.

use std::sync::Arc;

use log::{debug, info};

use crate::config::FormConfig;
use crate::country::{CountryDirectory, PostalCodeTable, PostalCodeValidator, StaticDirectory};
use crate::error::{FormError, Result};
use crate::validation::{
    CheckMode, DisplayPanel, FieldBinding, FieldError, FieldId, FormField, InvalidMarker,
    ValidationResult, email_battery, password_battery,
};
use crate::widgets::{Autocomplete, FuzzyMatcher, NucleoMatcher};

pub const SELECT_FROM_LIST_MESSAGE: &str = "Please select a country from the list.";
pub const SELECT_COUNTRY_FIRST_MESSAGE: &str = "Select a country first.";
pub const ENTER_PASSWORD_FIRST_MESSAGE: &str = "Enter a password first.";
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// One input and the panel listing its messages.
#[derive(Clone)]
pub struct FieldSurface {
    pub field: Arc<dyn FormField>,
    pub errors: Arc<dyn DisplayPanel>,
}

/// Everything the host renders for the signup form.
#[derive(Clone)]
pub struct FormSurface {
    pub email: FieldSurface,
    pub country: FieldSurface,
    /// Floating panel listing country suggestions.
    pub country_suggestions: Arc<dyn DisplayPanel>,
    pub postal_code: FieldSurface,
    pub password: FieldSurface,
    pub confirm_password: FieldSurface,
}

/// External services the form consults.
#[derive(Clone)]
pub struct Services {
    pub directory: Arc<dyn CountryDirectory>,
    pub matcher: Arc<dyn FuzzyMatcher>,
    pub postal_codes: Arc<dyn PostalCodeValidator>,
}

impl Services {
    /// Bundled country list, nucleo fuzzy matching and postal code table.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            directory: Arc::new(StaticDirectory::default()),
            matcher: Arc::new(NucleoMatcher),
            postal_codes: Arc::new(PostalCodeTable::bundled()?),
        })
    }
}

/// Keyboard input while the suggestion panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// Events the host forwards to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The field's value changed.
    Input(FieldId),
    /// The field gained focus.
    Focus(FieldId),
    /// A country suggestion was clicked.
    SuggestionClicked(usize),
    /// A key was pressed in the country field.
    SuggestionKey(SuggestionKey),
    /// A click landed outside the suggestion panel.
    ClickOutside,
}

/// Live validation state of one mounted signup form.
///
/// Created when the page mounts and torn down when it unmounts. Every
/// handler recomputes validity from the current field values.
pub struct FormSession {
    email: FieldBinding,
    country: FieldBinding,
    autocomplete: Autocomplete,
    postal_code: FieldBinding,
    password: FieldBinding,
    confirm_password: FieldBinding,
    mounted: bool,
}

impl FormSession {
    /// Bind every field of `surface` and clear any stale messages.
    pub fn mount(surface: FormSurface, services: Services, config: &FormConfig) -> Result<Self> {
        config.validate()?;

        let email = FieldBinding::pattern(
            FieldId::Email,
            surface.email.field,
            surface.email.errors,
            email_battery()?,
        );

        let directory = Arc::clone(&services.directory);
        let country = FieldBinding::predicate(
            FieldId::Country,
            Arc::clone(&surface.country.field),
            surface.country.errors,
            move |value| {
                if directory.contains(value) {
                    Ok(())
                } else {
                    Err(SELECT_FROM_LIST_MESSAGE.to_string())
                }
            },
        )
        .with_marker(InvalidMarker::Class);

        let autocomplete = Autocomplete::new(
            Arc::clone(&surface.country.field),
            surface.country_suggestions,
            services.matcher,
            services.directory.names(),
        )
        .with_limit(config.suggestion_limit)
        .with_min_score(config.min_score);

        let country_field = surface.country.field;
        let directory = services.directory;
        let postal_codes = services.postal_codes;
        let postal_code = FieldBinding::predicate(
            FieldId::PostalCode,
            surface.postal_code.field,
            surface.postal_code.errors,
            move |value| {
                let country = country_field.value();
                if country.is_empty() || country_field.is_invalid() {
                    return Err(SELECT_COUNTRY_FIRST_MESSAGE.to_string());
                }
                let Some(code) = directory.code_for(&country) else {
                    return Err(SELECT_COUNTRY_FIRST_MESSAGE.to_string());
                };
                postal_codes.validate(&code, value)
            },
        );

        let password_field = Arc::clone(&surface.password.field);
        let password = FieldBinding::pattern(
            FieldId::Password,
            surface.password.field,
            surface.password.errors,
            password_battery(config.password_min_len, config.password_max_len)?,
        )
        .with_max_len(config.password_max_len);

        let confirm_password = FieldBinding::predicate(
            FieldId::ConfirmPassword,
            surface.confirm_password.field,
            surface.confirm_password.errors,
            move |value| {
                let password = password_field.value();
                if password.is_empty() {
                    Err(ENTER_PASSWORD_FIRST_MESSAGE.to_string())
                } else if password != value {
                    Err(PASSWORDS_MISMATCH_MESSAGE.to_string())
                } else {
                    Ok(())
                }
            },
        )
        .with_max_len(config.password_max_len);

        let mut session = Self {
            email,
            country,
            autocomplete,
            postal_code,
            password,
            confirm_password,
            mounted: true,
        };
        session.autocomplete.close();
        for id in FieldId::ALL {
            session.binding(id).reset();
        }

        info!("[session] mounted");
        Ok(session)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The binding for one field.
    pub fn binding(&self, id: FieldId) -> &FieldBinding {
        match id {
            FieldId::Email => &self.email,
            FieldId::Country => &self.country,
            FieldId::PostalCode => &self.postal_code,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    /// Handle one host event.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<()> {
        if !self.mounted {
            return Err(FormError::TornDown);
        }
        debug!("[session] {:?}", event);

        match event {
            FormEvent::Input(FieldId::Country) => {
                self.country.reset();
                self.autocomplete.refresh();
                self.reset_postal_code();
            }
            FormEvent::Input(FieldId::Password) => {
                self.password.check(CheckMode::Input);
                if !self.confirm_password.field().value().is_empty() {
                    self.confirm_password.check(CheckMode::Input);
                }
            }
            FormEvent::Input(id) => {
                self.binding(id).check(CheckMode::Input);
            }
            FormEvent::Focus(FieldId::Country) => self.autocomplete.refresh(),
            FormEvent::Focus(_) | FormEvent::ClickOutside => self.close_suggestions(),
            FormEvent::SuggestionClicked(index) => {
                let selected = self.autocomplete.select(index);
                self.commit_selection(selected);
            }
            FormEvent::SuggestionKey(key) => match key {
                SuggestionKey::Up => self.autocomplete.cursor_up(),
                SuggestionKey::Down => self.autocomplete.cursor_down(),
                SuggestionKey::Enter => {
                    let selected = self.autocomplete.select_at_cursor();
                    self.commit_selection(selected);
                }
                SuggestionKey::Escape => self.close_suggestions(),
            },
        }
        Ok(())
    }

    /// Validate every field as on submission, in form order.
    pub fn submit(&mut self) -> Result<ValidationResult> {
        if !self.mounted {
            return Err(FormError::TornDown);
        }
        self.autocomplete.close();

        let errors: Vec<FieldError> = FieldId::ALL
            .into_iter()
            .filter_map(|id| {
                let messages = self.binding(id).check(CheckMode::Submit);
                (!messages.is_empty()).then_some(FieldError {
                    field: id,
                    messages,
                })
            })
            .collect();

        info!("[session] submit: {} invalid field(s)", errors.len());
        Ok(ValidationResult::from_errors(errors))
    }

    /// Close the panel, clear every message and marking, and stop
    /// accepting events.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.autocomplete.close();
        for id in FieldId::ALL {
            self.binding(id).reset();
        }
        self.mounted = false;
        info!("[session] torn down");
    }

    fn commit_selection(&mut self, selected: Option<String>) {
        if selected.is_some() {
            self.country.check(CheckMode::Input);
            self.reset_postal_code();
        }
    }

    fn close_suggestions(&mut self) {
        if self.autocomplete.close() {
            self.country.check(CheckMode::Input);
        }
    }

    fn reset_postal_code(&self) {
        self.postal_code.field().set_value("");
        self.postal_code.reset();
    }
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("autocomplete", &self.autocomplete)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
