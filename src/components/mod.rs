pub mod countdown;
pub mod footer;
pub mod logo;
pub mod nav;
pub mod reveal;
pub mod spline;
pub mod waitlist;
