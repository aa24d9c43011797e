use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_runner::core::{GameSession, GameSnapshot};
use tui_runner::term::{FrameBuffer, GameView, Viewport};
use tui_runner::types::{Intent, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both gates share the counter, so they run in one test.
#[test]
fn hot_paths_do_not_allocate() {
    // Session: tick, intents, game over and restart.
    let mut gs = GameSession::in_memory();
    let mut snap = GameSnapshot::default();
    let _ = gs.tick(TICK_MS);

    let allocs = with_alloc_counting(|| {
        for i in 0..3000u32 {
            if i % 40 == 0 {
                let _ = gs.apply_intent(Intent::Jump);
            }
            let _ = gs.tick(TICK_MS);
            if gs.game_over() {
                let _ = gs.apply_intent(Intent::Restart);
            }
            gs.snapshot_into(&mut snap);
        }
    });
    assert_eq!(allocs, 0, "session hot path allocated");

    // Rendering into a reused framebuffer.
    let mut view = GameView::new();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            let _ = gs.tick(TICK_MS);
            if gs.game_over() {
                let _ = gs.apply_intent(Intent::Restart);
            }
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "render path allocated");
}
