//! Ports - trait boundaries between the tracker and the outside world

pub mod outbound;
