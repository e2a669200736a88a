use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::celebration::Celebration;
use crate::games::object_work::{
    ObjectWork, Outcome, ARENA_H, ARENA_W, PLATFORM_ROW, PLATFORM_X0, PLATFORM_X1,
};
use crate::games::status_dynamics::{bar_position, Speaker, StatusDynamics, BAR_MAX, BAR_MIN};
use crate::games::story_connections::{Stage as StoryStage, StoryConnections};
use crate::games::switch_left::{Segment, Stage as SwitchStage, SwitchLeft};
use crate::games::{improv_keys, metamorphic, new_choice, reflections, three_things, vigil};
use crate::games::{ActiveGame, Week};
use crate::effects::Note;
use crate::sequencer::Status;
use crate::App;

const PARTICLE_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn accent() -> Style {
    bold().fg(Color::Yellow)
}

/// Tabs / body / footer split shared by rendering and mouse translation.
fn frame_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Where the week-3 arena lands for a given frame. The shell uses this
/// to translate mouse coordinates into arena cells, so it must agree
/// with `render_object_work`.
pub fn object_arena(area: Rect) -> Rect {
    let body = frame_chunks(area)[1];
    let w = (ARENA_W as u16).min(body.width);
    let h = (ARENA_H as u16).min(body.height);
    Rect::new(
        body.x + (body.width.saturating_sub(w)) / 2,
        body.y + (body.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = frame_chunks(area);

        let titles = Week::ALL
            .iter()
            .map(|w| Line::from(format!(" {} ", w.title())))
            .collect::<Vec<_>>();
        let selected = Week::ALL.iter().position(|&w| w == self.week).unwrap_or(0);
        Tabs::new(titles)
            .select(selected)
            .style(dim())
            .highlight_style(accent())
            .divider("|")
            .render(chunks[0], buf);

        match &self.game {
            ActiveGame::ThreeThings(g) => render_three_things(g, chunks[1], buf),
            ActiveGame::Metamorphic(g) => render_metamorphic(g, chunks[1], buf),
            ActiveGame::ObjectWork(g) => render_object_work(g, area, chunks[1], buf),
            ActiveGame::Vigil(g) => render_vigil(g, chunks[1], buf),
            ActiveGame::StoryConnections(g) => render_story_connections(g, chunks[1], buf),
            ActiveGame::StatusDynamics(g) => render_status_dynamics(g, chunks[1], buf),
            ActiveGame::SwitchLeft(g) => render_switch_left(g, chunks[1], buf),
            ActiveGame::NewChoice(g) => render_new_choice(g, chunks[1], buf),
            ActiveGame::ImprovKeys(g) => render_improv_keys(g, chunks[1], buf),
            ActiveGame::Reflections(g) => render_reflections(g, chunks[1], buf),
        }

        render_footer(self, chunks[2], buf);
        render_celebration(&self.celebration, area, buf);
    }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled(format!(" {} · {} ", app.week, app.week.title()), dim()),
        Span::styled("· tab/shift-tab weeks · esc quit", dim()),
    ];
    if let Some((note, _)) = app.tone_pulse {
        spans.push(Span::styled(
            format!("  ♪ {} {:.0}Hz", note.letter(), note.frequency_hz()),
            bold().fg(Color::Cyan),
        ));
    }
    if app.metronome_pulse > 0 {
        spans.push(Span::styled("  ●", bold().fg(Color::Red)));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    if !celebration.is_active {
        return;
    }
    for p in &celebration.particles {
        let (x, y) = (p.x.round() as i32, p.y.round() as i32);
        if x >= 0 && y >= 0 && (x as u16) < area.width && (y as u16) < area.height {
            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
                cell.set_char(p.symbol)
                    .set_style(bold().fg(PARTICLE_COLORS[p.color_index % PARTICLE_COLORS.len()]));
            }
        }
    }
}

/// Vertically pad `lines` into the middle of `area` and render centered.
/// Height accounts for wrapping of long lines.
fn centered(lines: Vec<Line>, area: Rect, buf: &mut Buffer) {
    let max_width = area.width.max(1) as usize;
    let height: u16 = lines
        .iter()
        .map(|l| {
            let w: usize = l.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(max_width).max(1) as u16
        })
        .sum();
    let top = area.height.saturating_sub(height) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(chunks[1], buf);
}

fn intro(title: &str, blurb: &str, hint: &str, area: Rect, buf: &mut Buffer) {
    centered(
        vec![
            Line::from(Span::styled(title.to_string(), accent())),
            Line::default(),
            Line::from(blurb.to_string()),
            Line::default(),
            Line::from(Span::styled(hint.to_string(), dim())),
        ],
        area,
        buf,
    );
}

fn input_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused { bold() } else { Style::default() };
    Line::from(vec![
        Span::styled(format!("{marker}{label} "), dim()),
        Span::styled(format!("{value}{}", if focused { "_" } else { "" }), style),
    ])
}

fn render_three_things(g: &three_things::ThreeThings, area: Rect, buf: &mut Buffer) {
    match g.status() {
        Status::Idle => intro(
            "THREE THINGS",
            "You get a category and five seconds. Name three things. \
             Right answers are not a concept here.",
            "enter to draw a category",
            area,
            buf,
        ),
        Status::Running => {
            let mut lines = vec![
                Line::from(Span::styled(
                    g.category.clone().unwrap_or_default(),
                    accent(),
                )),
                Line::from(Span::styled(format!("{}s", g.remaining_secs()), bold())),
                Line::default(),
            ];
            for (i, thing) in g.things.iter().enumerate() {
                lines.push(input_line(&format!("{}.", i + 1), thing, i == g.focus));
            }
            centered(lines, area, buf);
        }
        Status::Complete => {
            let mut lines = vec![
                Line::from(Span::styled("TIME!", accent())),
                Line::default(),
            ];
            for thing in g.things.iter().filter(|t| !t.trim().is_empty()) {
                lines.push(Line::from(thing.clone()));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("r to play again", dim())));
            centered(lines, area, buf);
        }
        Status::AwaitingInput => {}
    }
}

fn render_metamorphic(g: &metamorphic::Metamorphic, area: Rect, buf: &mut Buffer) {
    match g.status() {
        Status::Idle => intro(
            "METAMORPHOSIS",
            "Memorize ten digits in three seconds, then type them back. \
             Whatever you type becomes the next number. Five rounds.",
            "enter to start",
            area,
            buf,
        ),
        Status::Running => centered(
            vec![
                Line::from(Span::styled(
                    format!("round {}/{}", g.round(), metamorphic::ROUNDS),
                    dim(),
                )),
                Line::default(),
                Line::from(Span::styled(
                    g.current_number
                        .chars()
                        .map(|c| format!("{c} "))
                        .collect::<String>(),
                    accent(),
                )),
                Line::default(),
                Line::from(format!("memorize · {}s", g.remaining_secs())),
            ],
            area,
            buf,
        ),
        Status::AwaitingInput => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("round {}/{}", g.round(), metamorphic::ROUNDS),
                    dim(),
                )),
                Line::default(),
                Line::from("type it back:"),
                Line::from(Span::styled(format!("{}_", g.input), bold())),
            ];
            if let Some(err) = &g.error {
                lines.push(Line::from(Span::styled(err.clone(), bold().fg(Color::Red))));
            }
            centered(lines, area, buf);
        }
        Status::Complete => {
            let mut lines = vec![
                Line::from(Span::styled("THE NUMBER'S JOURNEY", accent())),
                Line::default(),
            ];
            lines.extend(g.history.iter().map(|n| Line::from(n.clone())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("r to play again", dim())));
            centered(lines, area, buf);
        }
    }
}

fn render_object_work(g: &ObjectWork, frame: Rect, area: Rect, buf: &mut Buffer) {
    if !g.started {
        intro(
            "OBJECT WORK",
            "Drag the object onto the shelf with your mouse. Move at the \
             speed its weight demands.",
            "enter to start",
            area,
            buf,
        );
        return;
    }
    if g.finished {
        centered(
            vec![
                Line::from(Span::styled("THE MIME APPROVES", accent())),
                Line::default(),
                Line::from("Both objects landed at an honest weight."),
                Line::default(),
                Line::from(Span::styled("r to play again", dim())),
            ],
            area,
            buf,
        );
        return;
    }

    let arena = object_arena(frame);
    let level = g.level();

    // Arena frame
    for y in 0..arena.height {
        for x in 0..arena.width {
            if let Some(cell) = buf.cell_mut((arena.x + x, arena.y + y)) {
                let border = x == 0 || y == 0 || x == arena.width - 1 || y == arena.height - 1;
                cell.set_char(if border { '·' } else { ' ' })
                    .set_style(dim());
            }
        }
    }

    // Platform
    let py = arena.y + PLATFORM_ROW as u16;
    for x in PLATFORM_X0 as u16..=PLATFORM_X1 as u16 {
        if x < arena.width {
            if let Some(cell) = buf.cell_mut((arena.x + x, py)) {
                cell.set_char('=').set_style(bold().fg(Color::Green));
            }
        }
    }

    // The object itself
    let (ox, oy) = g.object_pos;
    let (ox, oy) = (ox.round() as u16, oy.round() as u16);
    if ox < arena.width && oy < arena.height {
        if let Some(cell) = buf.cell_mut((arena.x + ox, arena.y + oy)) {
            let style = if g.is_dragging() {
                bold().fg(Color::Yellow)
            } else {
                bold().fg(Color::Cyan)
            };
            cell.set_char('O').set_style(style);
        }
    }

    let verdict = match g.outcome {
        Some(Outcome::Success) => Some(Span::styled("Landed true!", bold().fg(Color::Green))),
        Some(Outcome::WrongPace) => Some(Span::styled(level.fail_hint, bold().fg(Color::Red))),
        Some(Outcome::Missed) => Some(Span::styled(
            "That's not the shelf.",
            bold().fg(Color::Red),
        )),
        None => None,
    };
    let mut header = vec![
        Line::from(Span::styled(format!("the {}", level.object), accent())),
        Line::from(Span::styled(level.brief, dim())),
    ];
    if let Some(v) = verdict {
        header.push(Line::from(v));
    }
    let header_area = Rect::new(area.x, area.y, area.width, header.len() as u16);
    Paragraph::new(header)
        .alignment(Alignment::Center)
        .render(header_area, buf);
}

fn render_vigil(g: &vigil::Vigil, area: Rect, buf: &mut Buffer) {
    match g.status() {
        Status::Idle => intro(
            "THE VIGIL",
            "A blank page and a long sit. Type, or don't. Nothing is kept.",
            "enter to begin",
            area,
            buf,
        ),
        Status::Running => {
            let cursor = if g.cursor_visible { "_" } else { " " };
            let mut lines = vec![
                Line::from(Span::styled(format!("{}s", g.remaining_secs()), dim())),
                Line::default(),
            ];
            let mut body = g.text.split('\n').map(String::from).collect::<Vec<_>>();
            if let Some(last) = body.last_mut() {
                last.push_str(cursor);
            }
            lines.extend(body.into_iter().map(Line::from));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
        Status::Complete => intro(
            "THE BELL",
            "The sitting is over. The page goes unsaved, as promised.",
            "r to sit again",
            area,
            buf,
        ),
        Status::AwaitingInput => {}
    }
}

fn render_story_connections(g: &StoryConnections, area: Rect, buf: &mut Buffer) {
    match g.stage() {
        StoryStage::Setup => {
            let mut lines = vec![
                Line::from(Span::styled("STORY CONNECTIONS", accent())),
                Line::from(Span::styled(
                    "ten sentences about anything · enter on the last one submits",
                    dim(),
                )),
                Line::default(),
            ];
            for (i, s) in g.sentences.iter().enumerate() {
                lines.push(input_line(&format!("{:2}.", i + 1), s, i == g.focus));
            }
            if let Some(err) = &g.error {
                lines.push(Line::from(Span::styled(err.clone(), bold().fg(Color::Red))));
            }
            Paragraph::new(lines).render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
        StoryStage::Writing => {
            let Some(block) = g.current_block() else {
                return;
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    format!(
                        "block {}/{}",
                        g.block_index() + 1,
                        crate::games::story_connections::BLOCK_COUNT
                    ),
                    dim(),
                )),
                Line::default(),
            ];
            for (row, &slot) in g.order.iter().enumerate() {
                let text = match slot {
                    crate::games::story_connections::Slot::Bridge => {
                        format!("{}_", g.bridge_input)
                    }
                    other => block.line(other).to_string(),
                };
                let marker = if row == g.selected_row { "> " } else { "  " };
                let style = match slot {
                    crate::games::story_connections::Slot::Bridge => bold(),
                    _ => Style::default(),
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, dim()),
                    Span::styled(text, style),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "type the bridge · ctrl-↑/↓ reorder · enter commits",
                dim(),
            )));
            if let Some(err) = &g.error {
                lines.push(Line::from(Span::styled(err.clone(), bold().fg(Color::Red))));
            }
            centered(lines, area, buf);
        }
        StoryStage::Conclude => {
            let mut lines = vec![
                Line::from(Span::styled("THE READING", accent())),
                Line::default(),
            ];
            for block in &g.blocks {
                for &slot in &block.order {
                    lines.push(Line::from(block.line(slot).to_string()));
                }
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled("r to play again", dim())));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
    }
}

fn status_bar_line(label: &str, score: i32) -> Line<'static> {
    let pos = bar_position(score);
    let cells = (BAR_MIN..=BAR_MAX)
        .map(|i| if i == pos { '█' } else { '─' })
        .collect::<String>();
    Line::from(vec![
        Span::styled(format!("{label:9}"), dim()),
        Span::styled(cells, bold()),
        Span::styled(format!(" {score:+}"), dim()),
    ])
}

fn render_status_dynamics(g: &StatusDynamics, area: Rect, buf: &mut Buffer) {
    if g.status_fsm() == Status::Idle {
        intro(
            "STATUS DYNAMICS",
            "Your boss wants a word. Every reply raises or lowers you, \
             and the seesaw never balances.",
            "enter to walk in",
            area,
            buf,
        );
        return;
    }

    let mut lines = vec![
        status_bar_line("you", g.status.employee),
        status_bar_line("boss", g.status.boss),
        Line::default(),
    ];
    for msg in &g.messages {
        let (who, style) = match msg.speaker {
            Speaker::Boss => ("boss: ", bold().fg(Color::Red)),
            Speaker::Employee => ("you:  ", bold().fg(Color::Cyan)),
        };
        lines.push(Line::from(vec![
            Span::styled(who, style),
            Span::from(msg.text.clone()),
        ]));
    }
    lines.push(Line::default());

    if let Some(options) = g.current_options() {
        for (i, opt) in options.iter().enumerate() {
            let marker = if i == g.selected_option { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}. ", i + 1), dim()),
                Span::from(opt.text.clone()),
            ]));
        }
    } else if g.is_concluded() {
        lines.push(Line::from(Span::styled(
            "meeting over · r to play again",
            dim(),
        )));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
}

fn render_switch_left(g: &SwitchLeft, area: Rect, buf: &mut Buffer) {
    match g.stage() {
        SwitchStage::Intro => intro(
            "SWITCH LEFT",
            "Four stories, three rounds, ten seconds each. Every round the \
             stories slide one seat left and you continue someone else's.",
            "enter to deal the prompts",
            area,
            buf,
        ),
        SwitchStage::Playing => {
            let story = &g.stories[g.story_index];
            match g.segment() {
                Segment::Write => {
                    let sofar = story
                        .rounds
                        .iter()
                        .take(g.round)
                        .map(String::as_str)
                        .filter(|s| !s.is_empty())
                        .join(" ");
                    centered(
                        vec![
                            Line::from(Span::styled(
                                format!(
                                    "round {}/{} · story {}/{} · {}s",
                                    g.round + 1,
                                    crate::games::switch_left::ROUND_COUNT,
                                    g.story_index + 1,
                                    crate::games::switch_left::STORY_COUNT,
                                    g.remaining_secs()
                                ),
                                dim(),
                            )),
                            Line::default(),
                            Line::from(Span::styled(story.prompt.clone(), accent())),
                            Line::from(Span::styled(sofar, dim())),
                            Line::default(),
                            Line::from(Span::styled(
                                format!("{}_", story.rounds[g.round]),
                                bold(),
                            )),
                        ],
                        area,
                        buf,
                    );
                }
                Segment::Pause => centered(
                    vec![Line::from(Span::styled("pass it on...", dim()))],
                    area,
                    buf,
                ),
                Segment::Transition => centered(
                    vec![
                        Line::from(Span::styled("SWITCH LEFT!", accent())),
                        Line::default(),
                        Line::from(
                            g.transition_before_round(g.round + 1)
                                .unwrap_or("")
                                .to_string(),
                        ),
                    ],
                    area,
                    buf,
                ),
            }
        }
        SwitchStage::Summary => {
            let mut lines = vec![
                Line::from(Span::styled("THE READING", accent())),
                Line::default(),
            ];
            for story in &g.stories {
                lines.push(Line::from(Span::styled(story.prompt.clone(), bold())));
                for (round, text) in story.rounds.iter().enumerate() {
                    if let Some(t) = g.transition_before_round(round) {
                        lines.push(Line::from(Span::styled(format!("  {t}"), dim())));
                    }
                    lines.push(Line::from(format!("  {text}")));
                }
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled("r to play again", dim())));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
    }
}

fn render_new_choice(g: &new_choice::NewChoice, area: Rect, buf: &mut Buffer) {
    match g.stage {
        new_choice::Stage::Intro => intro(
            "NEW CHOICE",
            "Continue the story one sentence at a time. Half your lines \
             get thrown out by a director with a coin.",
            "enter to hear the opening line",
            area,
            buf,
        ),
        new_choice::Stage::Writing => {
            let mut lines = Vec::new();
            if g.rejected {
                lines.push(Line::from(Span::styled(
                    "NEW CHOICE!",
                    bold().fg(Color::Red),
                )));
                lines.push(Line::default());
            }
            for line in g.story_lines() {
                lines.push(Line::from(line.to_string()));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(format!("{}_", g.input), bold())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "enter submits · ctrl-d ends the story",
                dim(),
            )));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
        new_choice::Stage::Summary => {
            let mut lines = vec![
                Line::from(Span::styled("THE STORY THAT SURVIVED", accent())),
                Line::default(),
            ];
            lines.extend(g.story_lines().iter().map(|l| Line::from(l.to_string())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("r to play again", dim())));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
        }
    }
}

fn keyboard_line(flash: Option<Note>) -> Line<'static> {
    let mut spans = Vec::with_capacity(Note::ALL.len() * 2);
    for note in Note::ALL {
        let lit = flash == Some(note);
        let style = if lit {
            bold().fg(Color::Black).bg(Color::Cyan)
        } else {
            bold()
        };
        spans.push(Span::styled(format!("[{}{}]", note.key(), note.letter()), style));
        spans.push(Span::from(" "));
    }
    Line::from(spans)
}

fn render_improv_keys(g: &improv_keys::ImprovKeys, area: Rect, buf: &mut Buffer) {
    let flash = g.flash.map(|(n, _)| n);
    match g.stage() {
        improv_keys::Stage::Practice => centered(
            vec![
                Line::from(Span::styled(
                    format!("warm up · recital in {}s", g.remaining_secs()),
                    dim(),
                )),
                Line::default(),
                keyboard_line(flash),
            ],
            area,
            buf,
        ),
        improv_keys::Stage::Countdown => centered(
            vec![
                Line::from(Span::styled(
                    format!("{}", g.remaining_secs()),
                    accent(),
                )),
                Line::default(),
                keyboard_line(flash),
            ],
            area,
            buf,
        ),
        improv_keys::Stage::Recital => centered(
            vec![
                Line::from(Span::styled(
                    format!("RECORDING · {}s", g.remaining_secs()),
                    bold().fg(Color::Red),
                )),
                Line::default(),
                keyboard_line(flash),
                Line::default(),
                Line::from(Span::styled(
                    format!("{} notes so far", g.recorded.len()),
                    dim(),
                )),
            ],
            area,
            buf,
        ),
        improv_keys::Stage::Playback => {
            let mut lines = vec![
                Line::from(Span::styled("your loop, underneath", dim())),
                keyboard_line(flash),
                Line::default(),
                Line::from("while it plays, write what it sounds like:"),
            ];
            lines.extend(g.story.split('\n').map(|l| Line::from(l.to_string())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("ctrl-r to start over", dim())));
            centered(lines, area, buf);
        }
    }
}

fn render_reflections(g: &reflections::Reflections, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled("REFLECTIONS", accent())),
        Line::default(),
    ];
    for (title, body) in reflections::NOTES {
        lines.push(Line::from(Span::styled(*title, bold())));
        lines.push(Line::from(*body));
        lines.push(Line::default());
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((g.scroll, 0))
        .render(area.inner(ratatui::layout::Margin::new(4, 1)), buf);
}
