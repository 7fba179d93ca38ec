//! Payment tabs of an arrival as a state machine
//!
//! Progress is `banque -> swift -> reclamation`. Each progress state carries
//! the data of the sections already saved, so a SWIFT payment without a bank
//! nomination cannot be represented. Claims are only marked treated, never
//! reverted.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTab {
    Banque,
    Swift,
    Reclamation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BankNomination {
    pub banque: String,
    pub numero_compte: String,
    #[serde(default)]
    pub agence: Option<String>,
}

impl BankNomination {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("banque", Some(self.banque.as_str()))
            .required("numero_compte", Some(self.numero_compte.as_str()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwiftPayment {
    pub reference_swift: String,
    #[serde(default)]
    pub date_paiement: Option<String>,
    #[serde(default)]
    pub montant: Option<f64>,
}

impl SwiftPayment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("reference_swift", Some(self.reference_swift.as_str()))
            .date("date_paiement", self.date_paiement.as_deref())
            .positive("montant", self.montant)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Claim {
    pub id: u32,
    pub objet: String,
    pub description: Option<String>,
    pub date: String,
    pub traitee: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewClaim {
    pub objet: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Sections saved so far
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentProgress {
    AwaitingBank,
    AwaitingSwift {
        bank: BankNomination,
    },
    Claims {
        bank: BankNomination,
        swift: SwiftPayment,
        claims: Vec<Claim>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentWorkflow {
    progress: PaymentProgress,
    active: PaymentTab,
}

/// Serializable view of a workflow
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentSnapshot {
    pub active_tab: PaymentTab,
    pub unlocked_tabs: Vec<PaymentTab>,
    pub banque: Option<BankNomination>,
    pub swift: Option<SwiftPayment>,
    pub reclamations: Vec<Claim>,
    pub banque_valid: bool,
    pub swift_valid: bool,
    pub complete: bool,
}

impl Default for PaymentWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentWorkflow {
    pub fn new() -> Self {
        Self {
            progress: PaymentProgress::AwaitingBank,
            active: PaymentTab::Banque,
        }
    }

    pub fn active_tab(&self) -> PaymentTab {
        self.active
    }

    /// Furthest tab reachable
    fn unlocked(&self) -> PaymentTab {
        match self.progress {
            PaymentProgress::AwaitingBank => PaymentTab::Banque,
            PaymentProgress::AwaitingSwift { .. } => PaymentTab::Swift,
            PaymentProgress::Claims { .. } => PaymentTab::Reclamation,
        }
    }

    pub fn unlocked_tabs(&self) -> Vec<PaymentTab> {
        [PaymentTab::Banque, PaymentTab::Swift, PaymentTab::Reclamation]
            .into_iter()
            .filter(|tab| *tab <= self.unlocked())
            .collect()
    }

    pub fn select_tab(&mut self, tab: PaymentTab) -> Result<(), DomainError> {
        if tab > self.unlocked() {
            return Err(DomainError::InvalidTransition(format!(
                "tab {:?} is locked until the previous step is saved",
                tab
            )));
        }
        self.active = tab;
        Ok(())
    }

    /// Save (or correct) the bank nomination. The first save unlocks `swift`.
    pub fn save_bank(&mut self, bank: BankNomination) -> Result<(), DomainError> {
        bank.validate()?;
        match &mut self.progress {
            PaymentProgress::AwaitingBank => {
                self.progress = PaymentProgress::AwaitingSwift { bank };
                self.active = PaymentTab::Swift;
            }
            PaymentProgress::AwaitingSwift { bank: saved }
            | PaymentProgress::Claims { bank: saved, .. } => {
                *saved = bank;
            }
        }
        Ok(())
    }

    /// Save the SWIFT payment. Requires a saved bank; the first save unlocks
    /// `reclamation`.
    pub fn save_swift(&mut self, swift: SwiftPayment) -> Result<(), DomainError> {
        swift.validate()?;
        match &mut self.progress {
            PaymentProgress::AwaitingBank => Err(DomainError::InvalidTransition(
                "the bank nomination must be saved before the SWIFT payment".to_string(),
            )),
            PaymentProgress::AwaitingSwift { bank } => {
                self.progress = PaymentProgress::Claims {
                    bank: bank.clone(),
                    swift,
                    claims: Vec::new(),
                };
                self.active = PaymentTab::Reclamation;
                Ok(())
            }
            PaymentProgress::Claims { swift: saved, .. } => {
                *saved = swift;
                Ok(())
            }
        }
    }

    pub fn add_claim(&mut self, claim: NewClaim) -> Result<&Claim, DomainError> {
        Validator::new()
            .required("objet", Some(claim.objet.as_str()))
            .finish()?;

        let PaymentProgress::Claims { claims, .. } = &mut self.progress else {
            return Err(DomainError::InvalidTransition(
                "claims can only be filed once the SWIFT payment is saved".to_string(),
            ));
        };

        let id = claims.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        claims.push(Claim {
            id,
            objet: claim.objet.trim().to_string(),
            description: claim
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            traitee: false,
        });
        self.active = PaymentTab::Reclamation;
        Ok(&claims[claims.len() - 1])
    }

    /// One-way: a treated claim stays treated.
    pub fn mark_treated(&mut self, claim_id: u32) -> Result<(), DomainError> {
        let PaymentProgress::Claims { claims, .. } = &mut self.progress else {
            return Err(DomainError::NotFound);
        };
        let claim = claims
            .iter_mut()
            .find(|c| c.id == claim_id)
            .ok_or(DomainError::NotFound)?;
        if claim.traitee {
            return Err(DomainError::InvalidTransition(format!(
                "claim {} is already treated",
                claim_id
            )));
        }
        claim.traitee = true;
        Ok(())
    }

    pub fn banque_valid(&self) -> bool {
        !matches!(self.progress, PaymentProgress::AwaitingBank)
    }

    pub fn swift_valid(&self) -> bool {
        matches!(self.progress, PaymentProgress::Claims { .. })
    }

    pub fn is_complete(&self) -> bool {
        match &self.progress {
            PaymentProgress::Claims { claims, .. } => claims.iter().all(|c| c.traitee),
            _ => false,
        }
    }

    pub fn snapshot(&self) -> PaymentSnapshot {
        let (banque, swift, reclamations) = match &self.progress {
            PaymentProgress::AwaitingBank => (None, None, Vec::new()),
            PaymentProgress::AwaitingSwift { bank } => (Some(bank.clone()), None, Vec::new()),
            PaymentProgress::Claims {
                bank,
                swift,
                claims,
            } => (Some(bank.clone()), Some(swift.clone()), claims.clone()),
        };
        PaymentSnapshot {
            active_tab: self.active,
            unlocked_tabs: self.unlocked_tabs(),
            banque,
            swift,
            reclamations,
            banque_valid: self.banque_valid(),
            swift_valid: self.swift_valid(),
            complete: self.is_complete(),
        }
    }
}

/// Workflows of every arrival, kept for the life of the process
#[derive(Clone, Default)]
pub struct PaymentStore {
    workflows: Arc<DashMap<i64, PaymentWorkflow>>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, arrivage_id: i64) -> PaymentSnapshot {
        self.workflows
            .get(&arrivage_id)
            .map(|w| w.snapshot())
            .unwrap_or_else(|| PaymentWorkflow::new().snapshot())
    }

    /// Run `step` on the arrival's workflow. A failed step leaves the store
    /// untouched, and stores nothing for an arrival seen for the first time.
    pub fn apply<F>(&self, arrivage_id: i64, step: F) -> Result<PaymentSnapshot, DomainError>
    where
        F: FnOnce(&mut PaymentWorkflow) -> Result<(), DomainError>,
    {
        match self.workflows.entry(arrivage_id) {
            Entry::Occupied(mut entry) => {
                let mut draft = entry.get().clone();
                step(&mut draft)?;
                let snapshot = draft.snapshot();
                entry.insert(draft);
                Ok(snapshot)
            }
            Entry::Vacant(entry) => {
                let mut draft = PaymentWorkflow::new();
                step(&mut draft)?;
                let snapshot = draft.snapshot();
                entry.insert(draft);
                Ok(snapshot)
            }
        }
    }
}
