use crate::consts;
use crate::util::center_rect;
use boxsnake::game::{Direction, GameState, Point, Status, Wall};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// A widget for drawing a snapshot of a game: a level & score bar on top, the
/// arena below it, and a line of key hints at the bottom.
///
/// The arena is drawn one terminal cell per grid cell, with grid row `y` on
/// screen row `box_size - 1 - y`, so that "up" in the game is up on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameView<'a> {
    state: &'a GameState,
    wall: &'a Wall,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState, wall: &'a Wall) -> GameView<'a> {
        GameView { state, wall }
    }

    fn hud(&self) -> String {
        let mut s = format!(" Level: {}  Score: {}", self.state.level, self.state.score);
        let status = self.state.status();
        if status != Status::Running {
            s.push_str("  ");
            s.push_str(&status.to_string());
        }
        s
    }

    fn hints(&self) -> Option<Line<'static>> {
        let (action, key) = match self.state.status() {
            Status::Running => return None,
            Status::Paused => (" Resume (", "r"),
            Status::GameOver => (" New game (", "n"),
        };
        Some(Line::from_iter([
            Span::raw(action),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ]))
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hud_area, arena_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(self.hud(), consts::SCORE_BAR_STYLE).render(hud_area, buf);

        let box_size = self.wall.box_size();
        let mut canvas = Canvas {
            area: center_rect(arena_area, Size::new(box_size, box_size)),
            box_size,
            buf,
        };
        for &p in self.wall.points() {
            canvas.draw_cell(p, consts::WALL_SYMBOL, consts::WALL_STYLE);
        }
        if let Some(treat) = self.state.treat {
            canvas.draw_cell(treat, consts::TREAT_SYMBOL, consts::TREAT_STYLE);
        }
        for &p in self.state.snake.iter().skip(1) {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(
            self.state.snake.head(),
            head_symbol(self.state.direction),
            consts::SNAKE_STYLE,
        );
        // Draw the collision last so that it covers whatever the snake ran
        // into
        if let Some(p) = self.state.collision {
            canvas.draw_cell(p, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        if let Some(hints) = self.hints() {
            hints.render(hints_area, buf);
        }
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    box_size: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Convert a grid cell to a position in the buffer, or `None` if it falls
    /// outside of the canvas
    fn screen_position(&self, p: Point) -> Option<Position> {
        let x = u16::try_from(p.x).ok()?;
        let y = u16::try_from(i32::from(self.box_size) - 1 - p.y).ok()?;
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        Some(Position::new(
            self.area.x.checked_add(x)?,
            self.area.y.checked_add(y)?,
        ))
    }

    fn draw_cell(&mut self, p: Point, symbol: char, style: Style) {
        let Some(pos) = self.screen_position(p) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
