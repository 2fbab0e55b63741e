#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use simbox_image as image;

#[doc(inline)]
pub use simbox_imgproc as imgproc;

#[doc(inline)]
pub use simbox_io as io;

#[doc(inline)]
pub use simbox_3d as k3d;

#[doc(inline)]
pub use simbox_annotate as annotate;
