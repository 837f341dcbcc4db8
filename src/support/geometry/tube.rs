//! Double-pipe exchanger geometry.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::{meter, millimeter},
};

use super::{AnnulusSection, GeometryError, LobeCount, LobeSection};

/// Per-side radial clearance left when a twisted insert is installed in
/// the outer tube, 0.5 mm.
///
/// The insert's peak diameter is manufactured to the outer tube's
/// nominal bore; the effective bore seen by the annulus flow is the
/// nominal bore opened by this clearance on each side.
#[must_use]
pub fn installation_clearance() -> Length {
    Length::new::<millimeter>(0.5)
}

/// One tube of the pair: outer diameter and wall thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeSpec {
    pub outer_diameter: Length,
    pub wall_thickness: Length,
}

impl TubeSpec {
    /// Inner diameter, `OD − 2t`.
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - 2.0 * self.wall_thickness
    }
}

/// Twist parameters of a helically-deformed inner tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistSpec {
    /// Axial length of one full rotation.
    pub pitch: Length,
    pub lobes: LobeCount,
    /// Radial depth from the peak circle to the valley circle.
    pub tooth_height: Length,
}

/// A flow passage reduced to the two numbers the correlations need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSection {
    pub area: Area,
    /// Governing diameter: tube ID, lobe equivalent diameter, or
    /// annulus hydraulic diameter depending on the passage.
    pub diameter: Length,
}

/// Full geometry of a double-pipe exchanger bank.
///
/// `passes` hairpin legs run in series; `tubes_per_pass` parallel
/// assemblies split the flow. A twisted inner tube is described by
/// `twist`; its peak diameter is the outer tube's nominal bore (see
/// [`installation_clearance`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HxGeometry {
    pub inner_tube: TubeSpec,
    pub outer_tube: TubeSpec,
    /// Straight length of one pass.
    pub length: Length,
    pub passes: u32,
    pub tubes_per_pass: u32,
    /// Absolute surface roughness used for friction factors.
    pub roughness: Length,
    pub twist: Option<TwistSpec>,
}

impl HxGeometry {
    #[must_use]
    pub fn is_twisted(&self) -> bool {
        self.twist.is_some()
    }

    /// Nominal outer diameter of the inner tube: the manufactured peak
    /// diameter for a twisted insert, the plain OD otherwise.
    #[must_use]
    pub fn nominal_inner_tube_od(&self) -> Length {
        if self.is_twisted() {
            self.outer_tube.inner_diameter()
        } else {
            self.inner_tube.outer_diameter
        }
    }

    /// Effective bore of the outer tube: nominal ID, opened by the
    /// installation clearance when a twisted insert is fitted.
    #[must_use]
    pub fn effective_bore(&self) -> Length {
        let bore = self.outer_tube.inner_diameter();
        if self.is_twisted() {
            bore + 2.0 * installation_clearance()
        } else {
            bore
        }
    }

    /// Lobed profile of the insert's outer surface, if twisted.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the twist parameters produce a
    /// degenerate profile.
    pub fn insert_section(&self) -> Result<Option<LobeSection>, GeometryError> {
        match &self.twist {
            None => Ok(None),
            Some(twist) => {
                let peak = self.nominal_inner_tube_od();
                let valley = peak - 2.0 * twist.tooth_height;
                LobeSection::new(peak, valley, twist.lobes).map(Some)
            }
        }
    }

    /// Tube-side flow passage: the inner tube's circular bore, or the
    /// lobed interior of the twisted insert.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for a degenerate cross-section.
    pub fn tube_flow(&self) -> Result<FlowSection, GeometryError> {
        match &self.twist {
            None => {
                let id = self.inner_tube.inner_diameter();
                Ok(circular_section(id))
            }
            Some(twist) => {
                // The wall follows the deformation, so the interior is
                // the outer profile shrunk by twice the wall thickness.
                let peak = self.nominal_inner_tube_od() - 2.0 * self.inner_tube.wall_thickness;
                let valley = peak - 2.0 * twist.tooth_height;
                let section = LobeSection::new(peak, valley, twist.lobes)?;
                Ok(FlowSection {
                    area: section.area,
                    diameter: section.equivalent_diameter,
                })
            }
        }
    }

    /// Annulus-side flow passage.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the inner tube or insert leaves no
    /// positive gap.
    pub fn annulus_flow(&self) -> Result<AnnulusSection, GeometryError> {
        match &self.twist {
            None => AnnulusSection::around_plain(
                self.outer_tube.inner_diameter(),
                self.inner_tube.outer_diameter,
            ),
            Some(twist) => {
                let insert = self
                    .insert_section()?
                    .expect("twist is present in this branch");
                AnnulusSection::around_lobed(
                    self.effective_bore(),
                    &insert,
                    self.nominal_inner_tube_od(),
                    twist.pitch,
                )
            }
        }
    }

    /// Outer surface area of the equivalent smooth inner tube across
    /// the whole bank.
    #[must_use]
    pub fn smooth_outer_area(&self) -> Area {
        let od = self.nominal_inner_tube_od().get::<meter>();
        let length = self.flow_length().get::<meter>() * f64::from(self.tubes_per_pass);
        Area::new::<uom::si::area::square_meter>(PI * od * length)
    }

    /// Total flow length through the passes in series.
    #[must_use]
    pub fn flow_length(&self) -> Length {
        self.length * f64::from(self.passes)
    }

    /// Roughness relative to the given governing diameter.
    #[must_use]
    pub fn relative_roughness(&self, diameter: Length) -> f64 {
        self.roughness.get::<meter>() / diameter.get::<meter>()
    }
}

fn circular_section(diameter: Length) -> FlowSection {
    let d = diameter.get::<meter>();
    FlowSection {
        area: Area::new::<uom::si::area::square_meter>(PI * d * d / 4.0),
        diameter,
    }
}
