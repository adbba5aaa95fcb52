// Rectangle Handle System (HWND-like)
// Tracks the rectangles tab items were laid out into, for hit testing and measurement
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register(Some("tab-home"), rect);
//   // Later, on a mouse click...
//   if let Some(hit) = registry.handle_at(column, row) {
//       let name = registry.get_name(hit);
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// Position and size of a laid-out rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectMetrics {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Width of the rectangle
    pub width: u16,
    /// Height of the rectangle
    pub height: u16,
}

impl RectMetrics {
    /// Check if a terminal cell (column, row) falls inside these metrics
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Registry entry for a rectangle
#[derive(Debug, Clone)]
struct RegistryEntry {
    /// Optional name/identifier for the rectangle
    name: Option<String>,
    /// Current metrics (position and size)
    metrics: RectMetrics,
}

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to registry entry
    handles: HashMap<u64, RegistryEntry>,
    /// Map of name to handle ID (for lookup by name)
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is never handed out
        }
    }

    /// Register a rectangle and return a handle
    /// If a name is provided and a rectangle with that name already exists, it will be updated
    pub fn register(&mut self, name: Option<&str>, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);

        if let Some(name_str) = name {
            if let Some(&existing_handle_id) = self.name_to_handle.get(name_str) {
                if let Some(entry) = self.handles.get_mut(&existing_handle_id) {
                    entry.metrics = metrics;
                    return RectHandle(existing_handle_id);
                }
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;

        self.handles.insert(
            handle_id,
            RegistryEntry {
                name: name.map(str::to_string),
                metrics,
            },
        );
        if let Some(name_str) = name {
            self.name_to_handle.insert(name_str.to_string(), handle_id);
        }

        RectHandle(handle_id)
    }

    /// Get name for a handle (if it was registered with a name)
    pub fn get_name(&self, handle: RectHandle) -> Option<&str> {
        self.handles
            .get(&handle.0)
            .and_then(|entry| entry.name.as_deref())
    }

    /// Find the handle whose rectangle contains the given cell
    /// Ties resolve to the most recently registered rectangle (drawn last, on top)
    pub fn handle_at(&self, x: u16, y: u16) -> Option<RectHandle> {
        self.handles
            .iter()
            .filter(|(_, entry)| entry.metrics.contains(x, y))
            .map(|(&id, _)| id)
            .max()
            .map(RectHandle)
    }

    /// Number of registered rectangles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
