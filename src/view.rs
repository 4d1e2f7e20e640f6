use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread,
    time::Duration,
};

use termion::{
    event::{Event, Key, MouseButton, MouseEvent},
    input::{MouseTerminal, TermRead},
    raw::IntoRawMode,
};
use tracing::{debug, info};

use lifeline::{pos, HashedWorld, Pos, Sim, World};

use crate::config::{MAX_SPEED, MIN_SPEED};

pub use canvas::Canvas;
mod canvas;

const PAN_STEP: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    TogglePlay,
    Forward,
    Backward,
    Latest,
    Start,
    Reset,
    Clear,
    Faster,
    Slower,
    Move(Dir),
    Recenter,
    /// screen position of a left click
    DrawStart(Pos),
    DrawMove(Pos),
    DrawEnd,
}

impl InputCmd {
    pub fn from_event(event: Event) -> Option<Self> {
        let command = match event {
            Event::Key(key) => match key {
                Key::Char('q') => InputCmd::Exit,
                Key::Char(' ') => InputCmd::TogglePlay,
                Key::Right => InputCmd::Forward,
                Key::Left => InputCmd::Backward,
                Key::Up => InputCmd::Latest,
                Key::Down => InputCmd::Start,
                Key::Char('r') => InputCmd::Reset,
                Key::Esc => InputCmd::Clear,
                Key::Char(',') => InputCmd::Faster,
                Key::Char('.') => InputCmd::Slower,
                Key::Char('w') => InputCmd::Move(Dir::Up),
                Key::Char('s') => InputCmd::Move(Dir::Down),
                Key::Char('a') => InputCmd::Move(Dir::Left),
                Key::Char('d') => InputCmd::Move(Dir::Right),
                Key::Char('c') => InputCmd::Recenter,
                _ => return None,
            },
            Event::Mouse(mouse) => match mouse {
                MouseEvent::Press(MouseButton::Left, x, y) => InputCmd::DrawStart(screen_pos(x, y)),
                MouseEvent::Hold(x, y) => InputCmd::DrawMove(screen_pos(x, y)),
                MouseEvent::Release(_, _) => InputCmd::DrawEnd,
                _ => return None,
            },
            Event::Unsupported(_) => return None,
        };
        Some(command)
    }
}

/// termion reports 1-based (column, row).
fn screen_pos(x: u16, y: u16) -> Pos {
    pos!(i64::from(y) - 1, i64::from(x) - 1)
}

/// viewer state that never reaches the simulation itself.
#[derive(Debug)]
pub struct Player {
    origin: Pos,
    playing: bool,
    tick: u32,
    speed: u32,
    fps: u32,
    /// state painted while the left button is held
    drawing: Option<bool>,
}

impl Player {
    pub fn new(speed: u32, fps: u32, playing: bool) -> Self {
        Self {
            origin: Pos::ORIGIN,
            playing,
            tick: 0,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            fps,
            drawing: None,
        }
    }

    fn to_world(&self, screen: Pos) -> Pos {
        self.origin + screen
    }

    /// applies one command, returns false when the viewer should stop.
    pub fn handle<W>(&mut self, sim: &mut Sim<W>, cmd: InputCmd) -> bool
    where
        W: World,
    {
        match cmd {
            InputCmd::Exit => return false,
            InputCmd::TogglePlay => self.playing = !self.playing,
            InputCmd::Forward => {
                self.playing = false;
                sim.step_forward();
            }
            InputCmd::Backward => sim.step_backward(),
            InputCmd::Latest => {
                self.playing = false;
                sim.jump_to_latest();
            }
            InputCmd::Start => {
                self.playing = false;
                sim.jump_to_start();
            }
            InputCmd::Reset => {
                self.playing = false;
                sim.reset();
            }
            InputCmd::Clear => {
                sim.clear();
                sim.reseed(W::default());
            }
            InputCmd::Faster => self.set_speed(self.speed + 1),
            InputCmd::Slower => self.set_speed(self.speed.saturating_sub(1)),
            InputCmd::Move(direction) => {
                self.origin = self.origin
                    + match direction {
                        Dir::Up => pos!(-PAN_STEP, 0),
                        Dir::Down => pos!(PAN_STEP, 0),
                        Dir::Left => pos!(0, -PAN_STEP),
                        Dir::Right => pos!(0, PAN_STEP),
                    }
            }
            InputCmd::Recenter => self.origin = Pos::ORIGIN,
            InputCmd::DrawStart(screen) => {
                let pos = self.to_world(screen);
                let alive = !sim.current().is_some_and(|w| w.get(pos).is_alive());
                self.drawing = Some(alive);
                sim.mutate_current(pos, alive);
            }
            InputCmd::DrawMove(screen) => {
                if let Some(alive) = self.drawing {
                    sim.mutate_current(self.to_world(screen), alive);
                }
            }
            InputCmd::DrawEnd => self.drawing = None,
        }
        true
    }

    fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        info!(speed = self.speed, "simulation speed");
    }

    /// advances the playback clock by one frame.
    pub fn tick<W>(&mut self, sim: &mut Sim<W>)
    where
        W: World,
    {
        if !self.playing {
            return;
        }
        if self.tick >= self.fps / self.speed {
            sim.step_forward();
            self.tick = 0;
        }
        self.tick += 1;
    }

    pub fn status<W>(&self, sim: &Sim<W>) -> String
    where
        W: World,
    {
        let state = if self.playing { "playing" } else { "paused" };
        format!(
            "gen {}/{} | cells {} | speed {} | {state} | origin {},{}",
            sim.generation(),
            sim.generation_count().saturating_sub(1),
            sim.population(),
            self.speed,
            self.origin.row,
            self.origin.col,
        )
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for event in stdin().events() {
        let Ok(event) = event else { break };
        if let Some(command) = InputCmd::from_event(event) {
            if sender.send(command).is_err() {
                break;
            }
        }
    }
}

/// runs the terminal viewer until the user quits.
pub fn run(mut sim: Sim<HashedWorld>, mut player: Player) -> io::Result<()> {
    let mut out = MouseTerminal::from(stdout().into_raw_mode()?);
    write!(out, "{}", termion::cursor::Hide)?;

    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));
    let frame = Duration::from_secs(1) / player.fps.max(1);

    'frames: loop {
        while let Ok(cmd) = receiver.try_recv() {
            debug!(?cmd, "input");
            if !player.handle(&mut sim, cmd) {
                break 'frames;
            }
        }
        player.tick(&mut sim);
        display_world(&mut out, &sim, &player)?;
        thread::sleep(frame);
    }

    write!(out, "{}{}", termion::clear::All, termion::cursor::Show)?;
    out.flush()
}

fn display_world<W>(out: &mut impl Write, sim: &Sim<W>, player: &Player) -> io::Result<()>
where
    W: World,
{
    let mut canvas = Canvas::from_screen()?;
    if let Some(world) = sim.current() {
        canvas.layer(|screen| {
            world
                .get(player.to_world(screen))
                .is_alive()
                .then_some('#')
        });
    }
    canvas.display(out, &player.status(sim))
}
