use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// An element type that keeps a per-thread count of live instances and can be told to panic on
/// a later clone, for exercising rollback paths.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked(pub usize);

impl Tracked {
    pub fn new(value: usize) -> Tracked {
        LIVE.set(LIVE.get() + 1);
        Tracked(value)
    }

    /// The number of instances created on this thread that haven't been dropped yet.
    pub fn live() -> isize {
        LIVE.get()
    }

    /// Allows `clones` more successful clones, after which every clone panics.
    pub fn fail_after(clones: usize) {
        CLONES_LEFT.set(Some(clones));
    }

    pub fn never_fail() {
        CLONES_LEFT.set(None);
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(left) = CLONES_LEFT.get() {
            if left == 0 {
                panic!("injected clone failure");
            }
            CLONES_LEFT.set(Some(left - 1));
        }
        Tracked::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.set(LIVE.get() - 1);
    }
}
