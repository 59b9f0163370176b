//! Gesture state machine.
//!
//! `InteractionState::apply` consumes one `ChartEvent`, updates the gesture
//! mode and pointer, and returns the `GestureEffect` the chart has to carry
//! out. It never touches the viewport itself, so event sequences can be
//! replayed without a drawing surface.

use serde::{Deserialize, Serialize};

use crate::core::ZoomDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
    ZoomingVerticalAxis,
}

/// Surface an input event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The plot area.
    Chart,
    /// The price-axis strip next to the plot area.
    PriceAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input event in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    PointerDown {
        target: PointerTarget,
        button: PointerButton,
        x: f64,
        y: f64,
    },
    PointerUp {
        target: PointerTarget,
        button: PointerButton,
    },
    PointerMove {
        target: PointerTarget,
        x: f64,
        y: f64,
        movement_x: f64,
        movement_y: f64,
    },
    PointerEnter {
        target: PointerTarget,
    },
    PointerLeave {
        target: PointerTarget,
    },
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
    },
    Resize {
        width: f64,
        height: f64,
    },
}

/// Work a chart has to perform after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEffect {
    None,
    /// Crosshair visibility or stroke changed; redraw only.
    Redraw,
    /// Pointer moved without dragging: resolve the pointer index and redraw.
    Hover,
    /// Drag on the plot area: pan by `delta_x`, then behave like `Hover`.
    Pan { delta_x: f64 },
    /// Drag on the price axis: accumulate the vertical zoom factor.
    VerticalZoom { movement_y: f64 },
    /// One horizontal zoom step anchored at `anchor_x`.
    WheelZoom {
        direction: ZoomDirection,
        anchor_x: f64,
    },
    Resize { width: f64, height: f64 },
}

/// Crosshair/readout pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Nearest History index; kept inside `[0, len - 1]` by the chart.
    pub index: usize,
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            index: 0,
            visible: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    pointer: PointerState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pointer: PointerState::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pointer(self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn is_panning(self) -> bool {
        self.mode == InteractionMode::Panning
    }

    #[must_use]
    pub fn is_zooming_vertical(self) -> bool {
        self.mode == InteractionMode::ZoomingVerticalAxis
    }

    pub fn set_pointer_index(&mut self, index: usize) {
        self.pointer.index = index;
    }

    /// Applies one event and reports what the chart must do next.
    pub fn apply(&mut self, event: ChartEvent) -> GestureEffect {
        match event {
            ChartEvent::PointerDown {
                target: PointerTarget::Chart,
                button,
                x,
                y,
            } => {
                self.track(x, y);
                if button == PointerButton::Primary && self.mode == InteractionMode::Idle {
                    self.mode = InteractionMode::Panning;
                }
                GestureEffect::None
            }
            ChartEvent::PointerDown {
                target: PointerTarget::PriceAxis,
                ..
            } => {
                if self.mode == InteractionMode::Idle {
                    self.mode = InteractionMode::ZoomingVerticalAxis;
                }
                GestureEffect::None
            }
            ChartEvent::PointerUp {
                target: PointerTarget::Chart,
                button,
            } => {
                if button == PointerButton::Primary && self.mode == InteractionMode::Panning {
                    self.mode = InteractionMode::Idle;
                }
                GestureEffect::None
            }
            ChartEvent::PointerUp {
                target: PointerTarget::PriceAxis,
                ..
            } => {
                if self.mode == InteractionMode::ZoomingVerticalAxis {
                    self.mode = InteractionMode::Idle;
                }
                GestureEffect::None
            }
            ChartEvent::PointerMove {
                target: PointerTarget::Chart,
                x,
                y,
                movement_x,
                ..
            } => {
                self.track(x, y);
                self.pointer.visible = true;
                if self.mode == InteractionMode::Panning {
                    GestureEffect::Pan {
                        delta_x: movement_x,
                    }
                } else {
                    GestureEffect::Hover
                }
            }
            ChartEvent::PointerMove {
                target: PointerTarget::PriceAxis,
                movement_y,
                ..
            } => {
                if self.mode == InteractionMode::ZoomingVerticalAxis {
                    GestureEffect::VerticalZoom { movement_y }
                } else {
                    GestureEffect::None
                }
            }
            ChartEvent::PointerEnter {
                target: PointerTarget::Chart,
            } => {
                self.pointer.visible = true;
                GestureEffect::Redraw
            }
            ChartEvent::PointerEnter {
                target: PointerTarget::PriceAxis,
            } => GestureEffect::None,
            ChartEvent::PointerLeave {
                target: PointerTarget::Chart,
            } => {
                self.pointer.visible = false;
                self.mode = InteractionMode::Idle;
                GestureEffect::Redraw
            }
            ChartEvent::PointerLeave {
                target: PointerTarget::PriceAxis,
            } => {
                if self.mode == InteractionMode::ZoomingVerticalAxis {
                    self.mode = InteractionMode::Idle;
                }
                GestureEffect::None
            }
            ChartEvent::Wheel { x, y, delta_y } => {
                self.track(x, y);
                match ZoomDirection::from_wheel_delta(delta_y) {
                    Some(direction) => GestureEffect::WheelZoom {
                        direction,
                        anchor_x: self.pointer.x,
                    },
                    None => GestureEffect::None,
                }
            }
            ChartEvent::Resize { width, height } => GestureEffect::Resize { width, height },
        }
    }

    fn track(&mut self, x: f64, y: f64) {
        if x.is_finite() {
            self.pointer.x = x;
        }
        if y.is_finite() {
            self.pointer.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ChartEvent, GestureEffect, InteractionMode, InteractionState, PointerButton,
        PointerTarget,
    };

    fn down(target: PointerTarget) -> ChartEvent {
        ChartEvent::PointerDown {
            target,
            button: PointerButton::Primary,
            x: 10.0,
            y: 10.0,
        }
    }

    #[test]
    fn axis_drag_cannot_start_while_panning() {
        let mut state = InteractionState::default();
        state.apply(down(PointerTarget::Chart));
        state.apply(down(PointerTarget::PriceAxis));
        assert_eq!(state.mode(), InteractionMode::Panning);
    }

    #[test]
    fn secondary_button_does_not_pan() {
        let mut state = InteractionState::default();
        state.apply(ChartEvent::PointerDown {
            target: PointerTarget::Chart,
            button: PointerButton::Secondary,
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(state.mode(), InteractionMode::Idle);
    }

    #[test]
    fn non_finite_pointer_keeps_last_position() {
        let mut state = InteractionState::default();
        let effect = state.apply(ChartEvent::PointerMove {
            target: PointerTarget::Chart,
            x: f64::NAN,
            y: 42.0,
            movement_x: 0.0,
            movement_y: 0.0,
        });
        assert_eq!(effect, GestureEffect::Hover);
        assert_eq!(state.pointer().x, 0.0);
        assert_eq!(state.pointer().y, 42.0);
    }
}
