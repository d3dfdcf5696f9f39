//! Interfaces the host implements so the coordinator can hand artifacts off.

use crate::common::CollaboratorError;
use crate::derive::Surface;

/// Receives one surface's artifact and makes it visually effective.
///
/// Each call must fully replace whatever a previous call injected, so
/// injecting the same artifact twice is harmless.
pub trait StyleInjector: Send + Sync {
    fn inject(&self, artifact: &str) -> Result<(), CollaboratorError>;
}

/// Optional host hook told whether the applied theme is dark.
pub trait ModeSignal: Send + Sync {
    fn set_dark_mode(&self, dark: bool) -> Result<(), CollaboratorError>;
}

/// The injectors registered for each surface. Any of them may be absent.
#[derive(Default)]
pub struct SurfaceInjectors {
    content: Option<Box<dyn StyleInjector>>,
    chrome: Option<Box<dyn StyleInjector>>,
    restricted: Option<Box<dyn StyleInjector>>,
}

impl SurfaceInjectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, surface: Surface, injector: impl StyleInjector + 'static) -> Self {
        self.set(surface, Box::new(injector));
        self
    }

    pub fn set(&mut self, surface: Surface, injector: Box<dyn StyleInjector>) {
        *self.slot_mut(surface) = Some(injector);
    }

    pub fn get(&self, surface: Surface) -> Option<&dyn StyleInjector> {
        match surface {
            Surface::Content => self.content.as_deref(),
            Surface::Chrome => self.chrome.as_deref(),
            Surface::Restricted => self.restricted.as_deref(),
        }
    }

    fn slot_mut(&mut self, surface: Surface) -> &mut Option<Box<dyn StyleInjector>> {
        match surface {
            Surface::Content => &mut self.content,
            Surface::Chrome => &mut self.chrome,
            Surface::Restricted => &mut self.restricted,
        }
    }
}

impl std::fmt::Debug for SurfaceInjectors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceInjectors")
            .field("content", &self.content.is_some())
            .field("chrome", &self.chrome.is_some())
            .field("restricted", &self.restricted.is_some())
            .finish()
    }
}
