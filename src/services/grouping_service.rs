// src/services/grouping_service.rs
//
// Grouping Service - splits the sorted image list into product groups
//
// Classifies each image in order and hands the markers to the domain
// segmenter. Emits one GroupSealed per group, in group order.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{segment, validate_partition, ProductGroup};
use crate::error::AppResult;
use crate::events::{EventBus, GroupSealed};
use crate::services::classification_service::ClassificationService;

pub struct GroupingService {
    classification: Arc<ClassificationService>,
    event_bus: Arc<EventBus>,
}

impl GroupingService {
    pub fn new(classification: Arc<ClassificationService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            classification,
            event_bus,
        }
    }

    /// `images` must already be sorted
    pub fn segment(&self, images: &[PathBuf]) -> AppResult<Vec<ProductGroup>> {
        let groups = segment(
            images
                .iter()
                .map(|image| (image.clone(), self.classification.classify(image))),
        );

        validate_partition(images, &groups)?;

        for group in &groups {
            self.event_bus
                .emit(GroupSealed::new(group.name.clone(), group.members.clone()));
        }

        Ok(groups)
    }
}
