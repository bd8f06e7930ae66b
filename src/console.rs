use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io;
use toruslife::{Grid, Pos2};

pub enum ConsoleCommand {
    Exit,
    ToggleRunning,
    Step,
    Randomize,
    Handled,
}

pub struct ConsoleRender {
    tl: Pos2,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Pos2::default(),
            report: String::new(),
        })
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // keep the last row for the footer
        let rows = rows.saturating_sub(1);
        let br = self.tl
            + Pos2 {
                x: cols as i32,
                y: rows as i32,
            };
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in grid.window(self.tl, br).iter() {
            let cell = cell - self.tl;
            queue!(stdout, cursor::MoveTo(cell.x as u16, cell.y as u16))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let event::Event::Key(key) = event::read()? else {
            return Ok(Some(ConsoleCommand::Handled));
        };
        Ok(Some(self.handle_key(key)))
    }

    fn handle_key(&mut self, key: KeyEvent) -> ConsoleCommand {
        match key {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q'),
                ..
            } => ConsoleCommand::Exit,
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => ConsoleCommand::ToggleRunning,
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => ConsoleCommand::Step,
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => ConsoleCommand::Randomize,
            // arrows to move grid
            KeyEvent { code, .. } => {
                match code {
                    KeyCode::Up => self.tl.y -= 1,
                    KeyCode::Down => self.tl.y += 1,
                    KeyCode::Left => self.tl.x -= 1,
                    KeyCode::Right => self.tl.x += 1,
                    _ => {}
                }
                ConsoleCommand::Handled
            }
        }
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), cursor::Show) {
            tracing::error!(?err, "failed to show cursor");
        }
    }
}
