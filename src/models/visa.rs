//! Visa applications and document validation
//!
//! An application collects documents (unique by type; a later upload
//! replaces the earlier one) and validates them against its kind's required
//! set in a fixed check order. Validation performs the only programmatic
//! transition, Draft → Submitted; every other status is a settable label.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

use super::currency::{Currency, ExchangeRateProvider};
use super::ids::VisaApplicationId;
use super::money::Money;

/// Document types an application can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentType {
    Passport,
    Photo,
    BankStatement,
    FlightTicket,
    HotelReservation,
    Insurance,
    Ds160Form,
    EmploymentLetter,
    InvitationLetter,
}

impl DocumentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::Photo => "Biometric Photo",
            Self::BankStatement => "Bank Statement",
            Self::FlightTicket => "Flight Ticket Reservation",
            Self::HotelReservation => "Hotel Reservation",
            Self::Insurance => "Travel Health Insurance",
            Self::Ds160Form => "DS-160 Form (US)",
            Self::EmploymentLetter => "Employment Letter",
            Self::InvitationLetter => "Invitation Letter",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An uploaded document; immutable once created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    doc_type: DocumentType,
    content: String,
    uploaded_on: NaiveDate,
    expires_on: Option<NaiveDate>,
}

impl Document {
    pub fn new(doc_type: DocumentType, content: impl Into<String>) -> PlannerResult<Self> {
        Self::with_expiry(doc_type, content, None)
    }

    pub fn with_expiry(
        doc_type: DocumentType,
        content: impl Into<String>,
        expires_on: Option<NaiveDate>,
    ) -> PlannerResult<Self> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Document content cannot be empty".into(),
            ));
        }
        Ok(Self {
            doc_type,
            content,
            uploaded_on: Local::now().date_naive(),
            expires_on,
        })
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn uploaded_on(&self) -> NaiveDate {
        self.uploaded_on
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expires_on
    }

    pub fn is_expired_as_of(&self, date: NaiveDate) -> bool {
        matches!(self.expires_on, Some(expiry) if date > expiry)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_as_of(Local::now().date_naive())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_expired() { " [EXPIRED]" } else { "" };
        write!(f, "{}: {}{}", self.doc_type, self.content, status)
    }
}

/// Processing status label of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisaStatus {
    Draft,
    Submitted,
    Processing,
    Approved,
    Rejected,
}

impl VisaStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Processing => "Processing",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Bare visa family, without the per-application detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisaTag {
    Schengen,
    Us,
}

impl fmt::Display for VisaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schengen => write!(f, "Schengen"),
            Self::Us => write!(f, "US"),
        }
    }
}

const SCHENGEN_FEE_EUR: Money = Money::from_lira(80);
const US_FEE_USD: Money = Money::from_lira(185);

const SCHENGEN_REQUIRED: [DocumentType; 4] = [
    DocumentType::Passport,
    DocumentType::Photo,
    DocumentType::Insurance,
    DocumentType::BankStatement,
];

const US_REQUIRED: [DocumentType; 4] = [
    DocumentType::Passport,
    DocumentType::Photo,
    DocumentType::Ds160Form,
    DocumentType::BankStatement,
];

// Validation probes documents in a fixed order that differs from the
// declared required order; the first gap found is the one reported.
const SCHENGEN_CHECK_ORDER: [DocumentType; 4] = [
    DocumentType::Passport,
    DocumentType::Insurance,
    DocumentType::BankStatement,
    DocumentType::Photo,
];

const US_CHECK_ORDER: [DocumentType; 4] = [
    DocumentType::Passport,
    DocumentType::Ds160Form,
    DocumentType::BankStatement,
    DocumentType::Photo,
];

/// The visa family an application belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VisaKind {
    /// Short-stay Schengen visa for a target country
    Schengen { target_country: String },
    /// US visa in a category such as B1/B2
    Us { category: String },
}

impl VisaKind {
    pub fn schengen(target_country: impl Into<String>) -> Self {
        Self::Schengen {
            target_country: target_country.into(),
        }
    }

    pub fn us_b1_b2() -> Self {
        Self::Us {
            category: "B1/B2".into(),
        }
    }

    pub fn tag(&self) -> VisaTag {
        match self {
            Self::Schengen { .. } => VisaTag::Schengen,
            Self::Us { .. } => VisaTag::Us,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Self::Schengen { target_country } => format!("Schengen Visa ({})", target_country),
            Self::Us { category } => format!("US Visa ({})", category),
        }
    }

    /// Consular fee, quoted in foreign currency and settled in lira
    pub fn fee(&self, rates: &dyn ExchangeRateProvider) -> Money {
        match self {
            Self::Schengen { .. } => rates.convert(SCHENGEN_FEE_EUR, Currency::Eur, Currency::Try),
            Self::Us { .. } => rates.convert(US_FEE_USD, Currency::Usd, Currency::Try),
        }
    }

    /// Required document types, in declaration order
    pub fn required_documents(&self) -> &'static [DocumentType] {
        match self {
            Self::Schengen { .. } => &SCHENGEN_REQUIRED,
            Self::Us { .. } => &US_REQUIRED,
        }
    }

    fn check_order(&self) -> &'static [DocumentType] {
        match self {
            Self::Schengen { .. } => &SCHENGEN_CHECK_ORDER,
            Self::Us { .. } => &US_CHECK_ORDER,
        }
    }
}

/// A visa application and its document checklist
#[derive(Debug, Clone, Serialize)]
pub struct VisaApplication {
    id: VisaApplicationId,
    applicant_name: String,
    kind: VisaKind,
    applied_on: NaiveDate,
    documents: Vec<Document>,
    status: VisaStatus,
}

impl VisaApplication {
    pub fn new(kind: VisaKind, applicant_name: impl Into<String>) -> PlannerResult<Self> {
        let applicant_name = applicant_name.into().trim().to_string();
        if applicant_name.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Applicant name cannot be empty".into(),
            ));
        }
        Ok(Self {
            id: VisaApplicationId::new(),
            applicant_name,
            kind,
            applied_on: Local::now().date_naive(),
            documents: Vec::new(),
            status: VisaStatus::Draft,
        })
    }

    /// Attach a document, replacing any earlier upload of the same type
    pub fn add_document(&mut self, document: Document) {
        self.documents.retain(|d| d.doc_type() != document.doc_type());
        self.documents.push(document);
    }

    pub fn document(&self, doc_type: DocumentType) -> Option<&Document> {
        self.documents.iter().find(|d| d.doc_type() == doc_type)
    }

    pub fn has_document(&self, doc_type: DocumentType) -> bool {
        self.document(doc_type).is_some()
    }

    /// Snapshot of the uploaded documents
    pub fn documents(&self) -> Vec<Document> {
        self.documents.clone()
    }

    /// Required types still absent, in the kind's declared required order
    pub fn missing_documents(&self) -> Vec<DocumentType> {
        self.kind
            .required_documents()
            .iter()
            .copied()
            .filter(|t| !self.has_document(*t))
            .collect()
    }

    /// Validate the checklist and submit on success
    ///
    /// Probes the kind's fixed check order and reports the first missing
    /// type; a present-but-expired passport fails fatally before the
    /// remaining checks. On success the application transitions
    /// Draft → Submitted.
    pub fn validate_documents(&mut self) -> PlannerResult<()> {
        for doc_type in self.kind.check_order() {
            if !self.has_document(*doc_type) {
                return Err(PlannerError::MissingDocument(*doc_type));
            }
            if *doc_type == DocumentType::Passport {
                if let Some(passport) = self.document(DocumentType::Passport) {
                    if passport.is_expired() {
                        return Err(PlannerError::ExpiredDocument(DocumentType::Passport));
                    }
                }
            }
        }
        self.status = VisaStatus::Submitted;
        Ok(())
    }

    pub fn id(&self) -> VisaApplicationId {
        self.id
    }

    pub fn applicant_name(&self) -> &str {
        &self.applicant_name
    }

    pub fn kind(&self) -> &VisaKind {
        &self.kind
    }

    pub fn applied_on(&self) -> NaiveDate {
        self.applied_on
    }

    pub fn status(&self) -> VisaStatus {
        self.status
    }

    /// Set the status label; no transition graph is enforced
    pub fn set_status(&mut self, status: VisaStatus) {
        self.status = status;
    }

    /// Deterministic text projection of the application
    pub fn export_to_text(&self, rates: &dyn ExchangeRateProvider) -> String {
        use crate::display::report::{double_separator, separator};

        let mut out = String::new();
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str("         VISA APPLICATION\n");
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str(&format!("Visa Type    : {}\n", self.kind.type_name()));
        out.push_str(&format!("Applicant    : {}\n", self.applicant_name));
        out.push_str(&format!("Application  : {}\n", self.applied_on));
        out.push_str(&format!("Status       : {}\n", self.status));
        out.push_str(&format!("Fee          : {}\n", self.kind.fee(rates)));
        out.push_str(&separator(39));
        out.push('\n');
        out.push_str("Uploaded Documents:\n");
        if self.documents.is_empty() {
            out.push_str("  (No documents uploaded yet)\n");
        } else {
            for document in &self.documents {
                out.push_str(&format!("  {}\n", document));
            }
        }
        let missing = self.missing_documents();
        if !missing.is_empty() {
            out.push_str(&separator(39));
            out.push('\n');
            out.push_str("Missing Documents:\n");
            for doc_type in missing {
                out.push_str(&format!("  • {}\n", doc_type));
            }
        }
        out.push_str(&double_separator(39));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::currency::StaticExchangeRates;
    use chrono::Duration;

    fn schengen() -> VisaApplication {
        VisaApplication::new(VisaKind::schengen("Germany"), "Ada Demir").unwrap()
    }

    fn doc(doc_type: DocumentType) -> Document {
        Document::new(doc_type, "uploaded.pdf").unwrap()
    }

    #[test]
    fn test_new_application_starts_as_draft() {
        let app = schengen();
        assert_eq!(app.status(), VisaStatus::Draft);
        assert!(app.documents().is_empty());
        assert_eq!(app.kind().type_name(), "Schengen Visa (Germany)");
    }

    #[test]
    fn test_blank_applicant_rejected() {
        assert!(VisaApplication::new(VisaKind::us_b1_b2(), "  ").is_err());
    }

    #[test]
    fn test_add_document_replaces_same_type() {
        let mut app = schengen();
        app.add_document(Document::new(DocumentType::Passport, "U1111111").unwrap());
        app.add_document(Document::new(DocumentType::Passport, "U2222222").unwrap());

        assert_eq!(app.documents().len(), 1);
        assert_eq!(app.document(DocumentType::Passport).unwrap().content(), "U2222222");
    }

    #[test]
    fn test_missing_documents_in_required_order() {
        let mut app = schengen();
        app.add_document(doc(DocumentType::Photo));

        assert_eq!(
            app.missing_documents(),
            [
                DocumentType::Passport,
                DocumentType::Insurance,
                DocumentType::BankStatement
            ]
        );
    }

    #[test]
    fn test_validation_reports_first_gap_in_check_order() {
        let mut app = schengen();
        // everything missing: passport is probed first
        assert_eq!(
            app.validate_documents().unwrap_err(),
            PlannerError::MissingDocument(DocumentType::Passport)
        );

        app.add_document(doc(DocumentType::Passport));
        app.add_document(doc(DocumentType::Photo));
        app.add_document(doc(DocumentType::BankStatement));

        // insurance is probed before the (present) photo and bank statement
        assert_eq!(
            app.validate_documents().unwrap_err(),
            PlannerError::MissingDocument(DocumentType::Insurance)
        );
        assert_eq!(app.status(), VisaStatus::Draft);
        assert_eq!(app.missing_documents(), [DocumentType::Insurance]);
    }

    #[test]
    fn test_validation_succeeds_and_submits() {
        let mut app = schengen();
        app.add_document(doc(DocumentType::Passport));
        app.add_document(doc(DocumentType::Photo));
        app.add_document(doc(DocumentType::BankStatement));
        app.add_document(doc(DocumentType::Insurance));

        app.validate_documents().unwrap();
        assert_eq!(app.status(), VisaStatus::Submitted);
        assert!(app.missing_documents().is_empty());
    }

    #[test]
    fn test_expired_passport_fails_before_other_gaps() {
        let mut app = schengen();
        let expired = Document::with_expiry(
            DocumentType::Passport,
            "U1111111",
            Some(Local::now().date_naive() - Duration::days(1)),
        )
        .unwrap();
        app.add_document(expired);
        // insurance is also missing, but the stale passport wins
        assert_eq!(
            app.validate_documents().unwrap_err(),
            PlannerError::ExpiredDocument(DocumentType::Passport)
        );
        assert_eq!(app.status(), VisaStatus::Draft);
    }

    #[test]
    fn test_us_check_order() {
        let mut app = VisaApplication::new(VisaKind::us_b1_b2(), "Ada Demir").unwrap();
        app.add_document(doc(DocumentType::Passport));
        app.add_document(doc(DocumentType::Photo));
        app.add_document(doc(DocumentType::BankStatement));

        assert_eq!(
            app.validate_documents().unwrap_err(),
            PlannerError::MissingDocument(DocumentType::Ds160Form)
        );
    }

    #[test]
    fn test_fees_settle_in_lira() {
        let rates = StaticExchangeRates;
        assert_eq!(
            VisaKind::schengen("Germany").fee(&rates),
            Money::from_lira(2960)
        );
        assert_eq!(
            VisaKind::us_b1_b2().fee(&rates),
            Money::from_lira_kurus(6382, 50)
        );
    }

    #[test]
    fn test_document_expiry_window() {
        let today = Local::now().date_naive();
        let passport = Document::with_expiry(DocumentType::Passport, "U1", Some(today)).unwrap();
        // expires today: still valid
        assert!(!passport.is_expired_as_of(today));
        assert!(passport.is_expired_as_of(today + Duration::days(1)));

        let no_expiry = Document::new(DocumentType::Photo, "photo.jpg").unwrap();
        assert!(!no_expiry.is_expired());
    }

    #[test]
    fn test_documents_snapshot_is_a_copy() {
        let mut app = schengen();
        app.add_document(doc(DocumentType::Photo));

        let mut snapshot = app.documents();
        snapshot.clear();
        assert_eq!(app.documents().len(), 1);
    }

    #[test]
    fn test_export_lists_missing_documents() {
        let mut app = schengen();
        app.add_document(doc(DocumentType::Photo));

        let text = app.export_to_text(&StaticExchangeRates);
        assert!(text.contains("Visa Type    : Schengen Visa (Germany)"));
        assert!(text.contains("Fee          : 2960.00 TL"));
        assert!(text.contains("Missing Documents:"));
        assert!(text.contains("• Passport"));
    }
}
