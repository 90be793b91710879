use mini_tetris::core::{GameSnapshot, ScriptedSource, Session, StepOutcome};
use mini_tetris::term::{encode_diff_into, AnchorY, FrameBuffer, GameView, Viewport};
use mini_tetris::types::{MoveDirection, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn game_view_draws_locked_cells_after_drop() {
    let mut session = Session::new(ScriptedSource::new([PieceKind::O])).unwrap();
    session.start(1).unwrap();
    while session.step_down() == StepOutcome::Moved {}

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let viewport = Viewport::new(80, 24);
    let fb = view.render(&session.snapshot(), viewport);
    let (ox, oy) = view.board_origin(viewport);

    // O locked at board columns 4..6, rows 18..20.
    for (bx, by) in [(4u16, 18u16), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(fb.get(ox + bx * 2, oy + by).unwrap().ch, '█');
    }
    assert_ne!(fb.get(ox + 3 * 2, oy + 19).unwrap().ch, '█');
}

#[test]
fn game_view_reuses_framebuffer() {
    let mut session = Session::new(ScriptedSource::new([PieceKind::T])).unwrap();
    session.start(1).unwrap();

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(1, 1);

    session.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);
    let before = fb.clone();
    assert_eq!((fb.width(), fb.height()), (80, 24));

    session.apply(MoveDirection::Left);
    session.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let mut out = Vec::new();
    encode_diff_into(&before, &fb, &mut out).unwrap();
    assert!(!out.is_empty(), "moving the piece must change the frame");
}

#[test]
fn game_view_shows_game_over() {
    let mut session = Session::new(ScriptedSource::new([PieceKind::O])).unwrap();
    session.start(1).unwrap();
    while !matches!(session.step_down(), StepOutcome::GameOver { .. }) {}

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("game_over"));
}
