//! Configuration resolution

pub mod template_root;

pub use template_root::{
    installed_template_root, resolve_template_root, template_root_beside,
    template_root_candidates, template_root_for, TEMPLATES_DIR,
};
