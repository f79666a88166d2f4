//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a guest check-in.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a guest check-out.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;

/// Marker type describing an interval start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing an interval end.
#[derive(Clone, Copy, Debug)]
pub struct End;
