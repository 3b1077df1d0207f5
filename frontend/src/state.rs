use log::{debug, warn};
use shared::{apply_edit, CertificationEdit, CertificationRecord};
use std::rc::Rc;
use yew::prelude::*;

/// Certification rows as edited on the dashboard
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CertificationBoard {
    pub records: Vec<CertificationRecord>,
}

impl CertificationBoard {
    pub fn new(records: Vec<CertificationRecord>) -> Self {
        Self { records }
    }
}

impl Reducible for CertificationBoard {
    type Action = CertificationEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut records = self.records.clone();
        match apply_edit(&mut records, &action) {
            Some(record) => {
                debug!(
                    "Certification {} now {} / {}",
                    record.id, record.category, record.completed
                );
                Rc::new(Self { records })
            }
            None => {
                warn!("No certification with id {}, edit dropped", action.id());
                self
            }
        }
    }
}
