//! Leptos DragDrop Utilities
//! 
//! Mouse-driven drag-and-drop for a flat, reorderable Leptos list.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target: the slot between rows where the dragged row lands.
/// `Slot(0)` is above the first row, `Slot(len)` below the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<i64>>,
    pub dragging_id_write: WriteSignal<Option<i64>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<i64>>,
    pub pending_id_write: WriteSignal<Option<i64>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Movement in pixels before a pending press becomes a drag
    pub threshold_px: i32,
}

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<i64>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<i64>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        threshold_px,
    }
}

/// Whether a pointer moved far enough from the press point to start a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold_px: i32) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Move `dragged` into `slot` of `order`.
///
/// Returns the new order, or `None` when the drop leaves the order unchanged
/// (the slot directly above or below the dragged row) or `dragged` is unknown.
pub fn move_to_slot<T: Copy + PartialEq>(order: &[T], dragged: T, slot: usize) -> Option<Vec<T>> {
    let from = order.iter().position(|id| *id == dragged)?;
    let slot = slot.min(order.len());
    if slot == from || slot == from + 1 {
        return None;
    }
    let mut result: Vec<T> = order.iter().copied().filter(|id| *id != dragged).collect();
    // Slots past the removed row shift up by one
    let insert_at = if slot > from { slot - 1 } else { slot };
    result.insert(insert_at, dragged);
    Some(result)
}

/// End drag operation; clicks with nothing pending leave the signals alone
pub fn end_drag(dnd: &DndSignals) {
    if dnd.dragging_id_read.get_untracked().is_some() {
        dnd.dragging_id_write.set(None);
    }
    if dnd.drop_target_read.get_untracked().is_some() {
        dnd.drop_target_write.set(None);
    }
    if dnd.pending_id_read.get_untracked().is_some() {
        dnd.pending_id_write.set(None);
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row_id: i64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Presses on controls inside the row never start a drag
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y()), dnd.threshold_px) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(i64, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        
        end_drag(&dnd);
        
        // Plain clicks fall through to the row's own click handlers
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down() {
        // Drag 1 below 3
        assert_eq!(move_to_slot(&[1, 2, 3, 4], 1, 3), Some(vec![2, 3, 1, 4]));
    }

    #[test]
    fn test_move_up() {
        assert_eq!(move_to_slot(&[1, 2, 3, 4], 4, 0), Some(vec![4, 1, 2, 3]));
        assert_eq!(move_to_slot(&[1, 2, 3, 4], 3, 1), Some(vec![1, 3, 2, 4]));
    }

    #[test]
    fn test_move_to_end() {
        assert_eq!(move_to_slot(&[1, 2, 3], 1, 3), Some(vec![2, 3, 1]));
        // Slots past the end clamp to the end
        assert_eq!(move_to_slot(&[1, 2, 3], 2, 99), Some(vec![1, 3, 2]));
    }

    #[test]
    fn test_adjacent_slots_are_noop() {
        assert_eq!(move_to_slot(&[1, 2, 3], 2, 1), None);
        assert_eq!(move_to_slot(&[1, 2, 3], 2, 2), None);
    }

    #[test]
    fn test_unknown_dragged_id() {
        assert_eq!(move_to_slot(&[1, 2, 3], 9, 0), None);
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 10), DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold((10, 10), (16, 10), DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold((10, 10), (10, 4), DRAG_THRESHOLD_PX));
    }

    #[test]
    fn test_end_drag_clears_state() {
        let dnd = create_dnd_signals(DRAG_THRESHOLD_PX);
        dnd.pending_id_write.set(Some(7));
        dnd.dragging_id_write.set(Some(7));
        dnd.drop_target_write.set(Some(DropTarget::Slot(2)));
        end_drag(&dnd);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
    }

    #[test]
    fn test_end_drag_after_plain_click() {
        // A press that never moved only leaves a pending id behind
        let dnd = create_dnd_signals(DRAG_THRESHOLD_PX);
        dnd.pending_id_write.set(Some(3));
        end_drag(&dnd);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        end_drag(&dnd);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
    }
}
