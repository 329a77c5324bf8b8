// HTTP surface for skill extraction and resume/JD match scoring.
// Text extraction lives in `documents`; matching and scoring in `skills`.

pub mod form;
pub mod handlers;
