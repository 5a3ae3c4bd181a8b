//! Surface descriptions for world geometry

use strider_core::{Cardinal, LayerMask};

/// Material and layer description of a static surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Friction coefficient reported to adjacency probes
    pub friction: f32,
    /// Layers this surface belongs to
    pub layers: LayerMask,
    /// For one-way surfaces, the only side that obstructs movement; `None`
    /// means solid from every side
    pub solid_from: Option<Cardinal>,
}

impl Surface {
    /// An ordinary solid surface with the given friction
    pub fn solid(friction: f32) -> Self {
        Self {
            friction,
            layers: LayerMask::SOLID,
            solid_from: None,
        }
    }

    /// A surface that only obstructs movement arriving against `side`.
    ///
    /// A platform built with `Surface::one_way(f, Cardinal::Up)` catches a
    /// character falling onto its top face but lets one jump up through it.
    pub fn one_way(friction: f32, side: Cardinal) -> Self {
        Self {
            friction,
            layers: LayerMask::PLATFORM,
            solid_from: Some(side),
        }
    }

    /// Replace the layer membership
    pub fn with_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_constructors() {
        let ground = Surface::solid(0.4);
        assert_eq!(ground.layers, LayerMask::SOLID);
        assert!(ground.solid_from.is_none());

        let platform = Surface::one_way(0.6, Cardinal::Up);
        assert_eq!(platform.layers, LayerMask::PLATFORM);
        assert_eq!(platform.solid_from, Some(Cardinal::Up));

        let custom = Surface::solid(0.1).with_layers(LayerMask::SOLID | LayerMask::PLATFORM);
        assert!(custom.layers.intersects(LayerMask::PLATFORM));
    }
}
