//! Buttons that lean toward the pointer and spring back when it leaves.

use crate::constants::{MAGNETIC_SELECTOR, MAGNETIC_STRENGTH_ATTR, MAGNET_REST_EPSILON};
use crate::dom;
use crate::input::{offset_from_centre, parse_strength};
use crate::style::magnet_declarations;
use glam::Vec2;
use identra_core::constants::{MAGNET_DAMPING_RATIO, MAGNET_OMEGA, MAGNET_STRENGTH};
use identra_core::SpringFollower;
use web_sys as web;

pub struct Magnet {
    el: web::Element,
    spring: SpringFollower,
    at_rest: bool,
}

pub fn mount_magnets(document: &web::Document) -> Vec<Magnet> {
    let Some(page) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all(&page, MAGNETIC_SELECTOR)
        .into_iter()
        .map(|el| {
            let raw = el.get_attribute(MAGNETIC_STRENGTH_ATTR).unwrap_or_default();
            let strength = parse_strength(&raw, MAGNET_STRENGTH);
            Magnet {
                el,
                spring: SpringFollower::new(MAGNET_OMEGA, MAGNET_DAMPING_RATIO, strength),
                at_rest: true,
            }
        })
        .collect()
}

impl Magnet {
    pub fn update(&mut self, pointer: Option<Vec2>, dt_sec: f32) {
        let (origin, size) = dom::rect_origin_size(&self.el);
        // measured rect includes the current offset
        let origin = origin - self.spring.position;
        let hovered = pointer.filter(|p| {
            p.x >= origin.x && p.x <= origin.x + size.x && p.y >= origin.y && p.y <= origin.y + size.y
        });
        match hovered {
            Some(p) => self.spring.pull(offset_from_centre(p, origin, size)),
            None => self.spring.release(),
        }
        if self.at_rest && hovered.is_none() {
            return;
        }
        let pos = self.spring.step(dt_sec);
        self.at_rest = hovered.is_none() && self.spring.is_settled(MAGNET_REST_EPSILON);
        let pos = if self.at_rest { Vec2::ZERO } else { pos };
        dom::set_styles(&self.el, &magnet_declarations(pos.x, pos.y));
    }
}
