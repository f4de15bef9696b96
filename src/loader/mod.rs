pub(crate) mod lottie;
pub(crate) mod preload;
pub(crate) mod reveal;
