use super::*;

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
    sync::{Arc, Mutex},
};

mod mock_canvas;
mod mock_entity;
mod mock_filesystem;

pub use mock_canvas::*;
pub use mock_entity::*;
pub use mock_filesystem::*;
