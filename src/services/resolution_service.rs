// src/services/resolution_service.rs
//
// Resolution Service - one product code per group
//
// CRITICAL RULES:
// - Every member is analyzed; the highest confidence wins, the first member
//   wins ties
// - A group without any code falls back to its own name at confidence 0.0
// - When enabled, a code already taken by an earlier group of the same run
//   is suffixed with the later group's name so two groups never write the
//   same file names
// - Emits exactly one GroupCodeResolved per group

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{ProductGroup, ProductInfo, ResolvedGroupCode};
use crate::events::{EventBus, GroupCodeResolved};
use crate::services::extraction_service::ExtractionService;

pub struct ResolutionService {
    extraction: Arc<ExtractionService>,
    event_bus: Arc<EventBus>,
    disambiguate_collisions: bool,
}

impl ResolutionService {
    pub fn new(extraction: Arc<ExtractionService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            extraction,
            event_bus,
            disambiguate_collisions: true,
        }
    }

    pub fn with_disambiguation(mut self, enabled: bool) -> Self {
        self.disambiguate_collisions = enabled;
        self
    }

    /// Best code of a single group, without looking at other groups
    pub fn resolve_group(&self, group: &ProductGroup) -> ResolvedGroupCode {
        let mut best: Option<ProductInfo> = None;

        for member in &group.members {
            let Some(info) = self.extraction.analyze(member) else {
                continue;
            };

            let better = best
                .as_ref()
                .map_or(true, |current| info.confidence > current.confidence);
            if better {
                best = Some(info);
            }
        }

        match best {
            Some(info) => ResolvedGroupCode::extracted(&group.name, &info),
            None => ResolvedGroupCode::fallback(&group.name),
        }
    }

    /// Resolves every group in order, keeping codes unique across the run
    pub fn resolve_all(&self, groups: &[ProductGroup]) -> Vec<ResolvedGroupCode> {
        let mut claimed: HashSet<String> = HashSet::new();
        let mut resolved = Vec::with_capacity(groups.len());

        for group in groups {
            let mut code = self.resolve_group(group);

            if claimed.contains(&code.code) {
                if self.disambiguate_collisions {
                    log::warn!(
                        "Code {} already used by an earlier group, {} gets a suffixed code",
                        code.code,
                        group.name
                    );
                    code = code.disambiguate();
                } else {
                    log::warn!(
                        "Code {} already used by an earlier group, {} will overwrite its files",
                        code.code,
                        group.name
                    );
                }
            }
            claimed.insert(code.code.clone());

            self.event_bus.emit(GroupCodeResolved::new(
                code.group_name.clone(),
                code.code.clone(),
                code.confidence,
                code.source.to_string(),
            ));
            resolved.push(code);
        }

        resolved
    }
}
