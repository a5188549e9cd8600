//! Localized user-facing messages
//!
//! Messages live in Fluent files under `locales/`, one per supported
//! locale. Brazilian Portuguese is the default; lookups that miss in the
//! requested locale fall back to it.

use fluent::concurrent::FluentBundle;
use fluent::{FluentArgs, FluentResource};
use fluent_langneg::{accepted_languages, negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

use crate::error::LeadError;
use crate::validation::FieldError;

const PT_BR: &str = include_str!("../locales/pt-BR.ftl");
const EN_US: &str = include_str!("../locales/en-US.ftl");

/// Generic message shown when a field has no dedicated one
const FALLBACK_FIELD_MESSAGE: &str = "field-invalid";

/// A supported message locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::EnUs];

    pub fn langid(&self) -> LanguageIdentifier {
        match self {
            Locale::PtBr => langid!("pt-BR"),
            Locale::EnUs => langid!("en-US"),
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Locale::PtBr => PT_BR,
            Locale::EnUs => EN_US,
        }
    }

    /// Picks the best supported locale for an `Accept-Language` header
    pub fn negotiate(accept_language: &str, default: Locale) -> Locale {
        let requested = accepted_languages::parse(accept_language);
        let available: Vec<LanguageIdentifier> = Self::ALL.iter().map(Locale::langid).collect();
        let default_id = default.langid();
        let supported = negotiate_languages(
            &requested,
            &available,
            Some(&default_id),
            NegotiationStrategy::Filtering,
        );
        supported
            .first()
            .and_then(|id| Self::ALL.into_iter().find(|locale| locale.langid() == **id))
            .unwrap_or(default)
    }
}

/// Message bundles for every supported locale
pub struct Catalog {
    bundles: Vec<(Locale, FluentBundle<FluentResource>)>,
}

impl Catalog {
    /// Parses the embedded message files
    pub fn load() -> Result<Self, LeadError> {
        let bundles = Locale::ALL
            .into_iter()
            .map(|locale| Ok((locale, Self::bundle(locale)?)))
            .collect::<Result<Vec<_>, LeadError>>()?;
        Ok(Self { bundles })
    }

    fn bundle(locale: Locale) -> Result<FluentBundle<FluentResource>, LeadError> {
        let resource = FluentResource::try_new(locale.source().to_string()).map_err(
            |(_, errors)| LeadError::Messages(format!("{:?}: {:?}", locale, errors)),
        )?;
        let mut bundle = FluentBundle::new_concurrent(vec![locale.langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| LeadError::Messages(format!("{:?}: {:?}", locale, errors)))?;
        Ok(bundle)
    }

    fn lookup(&self, locale: Locale, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let (_, bundle) = self.bundles.iter().find(|(l, _)| *l == locale)?;
        let pattern = bundle.get_message(id)?.value()?;
        let mut errors = Vec::new();
        Some(bundle.format_pattern(pattern, args, &mut errors).into_owned())
    }

    fn resolve(&self, locale: Locale, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        self.lookup(locale, id, args)
            .or_else(|| self.lookup(Locale::default(), id, args))
    }

    /// Renders a message, falling back to the default locale and then to the id
    pub fn message(&self, locale: Locale, id: &str) -> String {
        self.resolve(locale, id, None)
            .unwrap_or_else(|| id.to_string())
    }

    /// Renders a message with named arguments
    pub fn message_with(&self, locale: Locale, id: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (key, value) in args {
            fluent_args.set(*key, *value);
        }
        self.resolve(locale, id, Some(&fluent_args))
            .unwrap_or_else(|| id.to_string())
    }

    /// Renders the message shown under a rejected field
    pub fn field_error(&self, locale: Locale, error: &FieldError) -> String {
        self.resolve(locale, &error.message_id(), None)
            .unwrap_or_else(|| self.message(locale, FALLBACK_FIELD_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FormField;
    use crate::validation::Reason;

    #[test]
    fn test_catalog_loads() {
        assert!(Catalog::load().is_ok());
    }

    #[test]
    fn test_generic_document_message() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.message(Locale::PtBr, "document-invalid"), "Documento inválido");
        assert_eq!(catalog.message(Locale::EnUs, "document-invalid"), "Invalid document");
    }

    #[test]
    fn test_field_error_messages() {
        let catalog = Catalog::load().unwrap();
        let missing = FieldError::new(FormField::Phone, Reason::Missing);
        let invalid = FieldError::new(FormField::Phone, Reason::Invalid);
        assert_eq!(catalog.field_error(Locale::PtBr, &missing), "Telefone obrigatório");
        assert_eq!(catalog.field_error(Locale::PtBr, &invalid), "Telefone inválido");
    }

    #[test]
    fn test_arguments_are_interpolated() {
        let catalog = Catalog::load().unwrap();
        let text = catalog.message_with(Locale::EnUs, "campaign-closed", &[("campaign", "voices-2025")]);
        assert_eq!(text, "Registrations for voices-2025 are closed.");
    }

    #[test]
    fn test_unknown_id_falls_back_to_id() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.message(Locale::EnUs, "no-such-message"), "no-such-message");
    }

    #[test]
    fn test_negotiation() {
        assert_eq!(Locale::negotiate("en-US,en;q=0.9", Locale::PtBr), Locale::EnUs);
        assert_eq!(Locale::negotiate("en", Locale::PtBr), Locale::EnUs);
        assert_eq!(Locale::negotiate("pt", Locale::EnUs), Locale::PtBr);
        assert_eq!(Locale::negotiate("fr-FR", Locale::PtBr), Locale::PtBr);
        assert_eq!(Locale::negotiate("", Locale::EnUs), Locale::EnUs);
    }
}
