//! Binds section presets to `data-motion-*` elements and applies their
//! evaluated tracks as inline styles.

use crate::constants::{ACTIVE_STAGE_ATTR, SECTION_ATTR, STAGE_ATTR, TARGET_ATTR};
use crate::dom;
use crate::style::{stage_declarations, ElementStyle};
use fnv::FnvHashMap;
use identra_core::sections::{differentiation, page_presets, problem_insight, SectionPreset};
use identra_core::{Choreographer, Property, ScrollPublisher};
use web_sys as web;

struct StageBinding {
    choreographer: Choreographer,
    /// `(stage index, subtree root)` for every `data-motion-stage` element.
    elements: Vec<(usize, web::Element)>,
}

pub struct SectionBinding {
    root: web::Element,
    preset: SectionPreset,
    publisher: ScrollPublisher,
    targets: FnvHashMap<String, Vec<web::Element>>,
    /// Horizontal overflow of targets driven by [`Property::OverflowX`].
    overflow: FnvHashMap<String, f32>,
    stages: Option<StageBinding>,
    last_offset: Option<f32>,
}

/// Find every `[data-motion-section]` and bind it to its preset.
pub fn mount_sections(window: &web::Window, document: &web::Document) -> Vec<SectionBinding> {
    let mut out = Vec::new();
    let Some(page) = document.document_element() else {
        return out;
    };
    for root in dom::query_all(&page, &format!("[{}]", SECTION_ATTR)) {
        let Some(id) = root.get_attribute(SECTION_ATTR) else {
            continue;
        };
        let targets = collect_targets(&root);
        let Some(preset) = preset_for(&id, &targets) else {
            log::warn!("[sections] no preset named {:?}", id);
            continue;
        };
        match SectionBinding::new(window, root, preset, targets) {
            Ok(binding) => out.push(binding),
            Err(e) => log::error!("[sections] {}: {}", id, e),
        }
    }
    log::info!("[sections] mounted {}", out.len());
    out
}

fn collect_targets(root: &web::Element) -> FnvHashMap<String, Vec<web::Element>> {
    let mut targets: FnvHashMap<String, Vec<web::Element>> = FnvHashMap::default();
    for el in dom::query_all(root, &format!("[{}]", TARGET_ATTR)) {
        if let Some(name) = el.get_attribute(TARGET_ATTR) {
            targets.entry(name).or_default().push(el);
        }
    }
    targets
}

/// Presets with per-item tracks are sized to the items present in markup.
fn preset_for(id: &str, targets: &FnvHashMap<String, Vec<web::Element>>) -> Option<SectionPreset> {
    let count = |prefix: &str| targets.keys().filter(|k| k.starts_with(prefix)).count();
    match id {
        "differentiation" => Some(differentiation(count("row-"))),
        "problem" => Some(problem_insight(count("statement-").max(1))),
        _ => page_presets().into_iter().find(|p| p.id == id),
    }
}

impl SectionBinding {
    fn new(
        window: &web::Window,
        root: web::Element,
        preset: SectionPreset,
        targets: FnvHashMap<String, Vec<web::Element>>,
    ) -> identra_core::MotionResult<Self> {
        let stages = match &preset.stages {
            Some(stage_preset) => {
                let choreographer = stage_preset.choreographer()?;
                let mut elements = Vec::new();
                for el in dom::query_all(&root, &format!("[{}]", STAGE_ATTR)) {
                    let name = el.get_attribute(STAGE_ATTR).unwrap_or_default();
                    match stage_preset.names.iter().position(|n| *n == name) {
                        Some(i) => elements.push((i, el)),
                        None => log::warn!("[sections] {}: unknown stage {:?}", preset.id, name),
                    }
                }
                Some(StageBinding {
                    choreographer,
                    elements,
                })
            }
            None => None,
        };
        let mut binding = Self {
            publisher: ScrollPublisher::new(dom::element_region(window, &root)),
            root,
            preset,
            targets,
            overflow: FnvHashMap::default(),
            stages,
            last_offset: None,
        };
        binding.measure(window);
        binding.apply_stages(true);
        Ok(binding)
    }

    /// Re-read bounds after a layout change.
    pub fn measure(&mut self, window: &web::Window) {
        self.publisher
            .set_region(dom::element_region(window, &self.root));
        self.overflow.clear();
        for b in &self.preset.bindings {
            if b.track.property != Property::OverflowX {
                continue;
            }
            let px = self
                .targets
                .get(&b.target)
                .and_then(|els| els.first())
                .map(|el| dom::overflow_x(window, el))
                .unwrap_or(0.0);
            self.overflow.insert(b.target.clone(), px);
        }
        self.last_offset = None;
    }

    /// Publish `scroll_y`, restyle targets if it moved, and advance stage fades.
    pub fn update(&mut self, scroll_y: f32, dt_sec: f32) {
        let sample = self.publisher.publish(scroll_y);
        if self.last_offset != Some(sample.offset) {
            self.last_offset = Some(sample.offset);
            let mut styles: FnvHashMap<&str, ElementStyle> = FnvHashMap::default();
            for v in self.preset.evaluate(&sample) {
                let overflow = self.overflow.get(v.target).copied().unwrap_or(0.0);
                styles
                    .entry(v.target)
                    .or_default()
                    .apply(v.property, v.value, overflow);
            }
            for (target, style) in &styles {
                if let Some(els) = self.targets.get(*target) {
                    let declarations = style.declarations();
                    for el in els {
                        dom::set_styles(el, &declarations);
                    }
                }
            }
        }

        let Some(stages) = &mut self.stages else {
            return;
        };
        let changed = stages.choreographer.update(sample.fraction).is_some();
        let was_fading = stages.choreographer.is_fading();
        stages.choreographer.advance(dt_sec);
        if changed || was_fading {
            self.apply_stages(changed);
        }
    }

    fn apply_stages(&self, write_attr: bool) {
        let Some(stages) = &self.stages else {
            return;
        };
        let ch = &stages.choreographer;
        if write_attr {
            _ = self.root.set_attribute(ACTIVE_STAGE_ATTR, ch.active_name());
        }
        for (i, el) in &stages.elements {
            dom::set_styles(el, &stage_declarations(ch.visibility(*i), ch.is_mounted(*i)));
        }
    }
}
