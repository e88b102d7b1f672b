//! Visa service
//!
//! Routes a country code to the right application kind, quotes fees, and
//! drives the external Submitted → Approved transition once validation
//! passes.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExchangeRateProvider, Money, VisaApplication, VisaKind, VisaStatus};

/// Schengen members the automatic system covers, code → display name
const SCHENGEN_COUNTRIES: [(&str, &str); 16] = [
    ("DE", "Germany"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("AT", "Austria"),
    ("CH", "Switzerland"),
    ("GR", "Greece"),
    ("PT", "Portugal"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("DK", "Denmark"),
    ("FI", "Finland"),
    ("PL", "Poland"),
    ("CZ", "Czech Republic"),
];

/// Creates and finalizes visa applications by country code
#[derive(Debug, Default)]
pub struct VisaService;

impl VisaService {
    pub fn new() -> Self {
        Self
    }

    /// Start an application for a destination country
    ///
    /// Schengen member codes produce a Schengen application carrying the
    /// country's display name; US/USA produces a B1/B2 US application.
    /// Unsupported codes are an error.
    pub fn create_application(
        &self,
        country_code: &str,
        applicant_name: &str,
    ) -> PlannerResult<VisaApplication> {
        let code = country_code.trim().to_uppercase();
        if code.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Country code cannot be empty".into(),
            ));
        }

        if let Some(country_name) = Self::schengen_country_name(&code) {
            info!(country = country_name, "creating Schengen visa application");
            return VisaApplication::new(VisaKind::schengen(country_name), applicant_name);
        }

        if code == "US" || code == "USA" {
            info!("creating US visa application");
            return VisaApplication::new(VisaKind::us_b1_b2(), applicant_name);
        }

        Err(PlannerError::InvalidArgument(format!(
            "Automatic visa system is not yet available for this country: {}",
            code
        )))
    }

    /// Validate the checklist and apply the external approval transition
    ///
    /// On success the application ends Approved; on failure it stays as it
    /// was, so the caller can upload the gap and retry.
    pub fn validate_and_approve(&self, application: &mut VisaApplication) -> PlannerResult<()> {
        application.validate_documents()?;
        application.set_status(VisaStatus::Approved);
        info!(
            visa = %application.kind().type_name(),
            applicant = application.applicant_name(),
            "visa application approved"
        );
        Ok(())
    }

    /// Consular fee for a supported country code, settled in lira
    pub fn visa_fee(
        &self,
        country_code: &str,
        rates: &dyn ExchangeRateProvider,
    ) -> Option<Money> {
        let code = country_code.trim().to_uppercase();
        if code == "US" || code == "USA" {
            return Some(VisaKind::us_b1_b2().fee(rates));
        }
        Self::schengen_country_name(&code)
            .map(|name| VisaKind::schengen(name).fee(rates))
    }

    /// Codes and display names the automatic system supports
    pub fn supported_schengen_countries(&self) -> &'static [(&'static str, &'static str)] {
        &SCHENGEN_COUNTRIES
    }

    fn schengen_country_name(code: &str) -> Option<&'static str> {
        SCHENGEN_COUNTRIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }
}
