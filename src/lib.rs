//! # starsight
//!
//! Positions of the stars, the Sun, the Moon and the planets in the sky of an observer, projected
//! on a plane for rendering.
//!
//! The pipeline, from the leaves up:
//!
//! 1. [`math`]: angles, intervals and polynomials,
//! 2. [`coordinates`]: the four spherical frames, the planar coordinates and the conversions,
//! 3. [`time`]: elapsed time since the reference epochs and sidereal time,
//! 4. [`models`]: closed-form orbital models of the Sun, the Moon and the planets,
//! 5. [`projection`]: the stereographic projection of the local sky,
//! 6. [`observed_sky`]: one projected snapshot of every body, with nearest-object queries.
//!
//! Stars and asterisms come from a [`catalogue::StarCatalogue`], built by hand or loaded from
//! data files, and [`config::ObservationConfig`] describes an observation in plain units.
pub mod bodies;
pub mod catalogue;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod math;
pub mod models;
pub mod observed_sky;
pub mod projection;
pub mod starsight_errors;
pub mod time;
