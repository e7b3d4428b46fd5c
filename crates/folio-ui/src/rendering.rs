use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use time::macros::format_description;

use folio_core::ChatRole;

use crate::shell_state::{ShellState, SubmissionStatus, View};

pub(crate) fn draw(frame: &mut Frame, shell: &mut ShellState) {
    let area = frame.area();
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]);
    let [main, footer] = layout.areas(area);

    match shell.current_view() {
        View::Home => render_home(frame, main, shell),
        View::Projects => render_projects(frame, main, shell),
        View::Resume => render_resume(frame, main, shell),
        View::AiChat => render_chat(frame, main, shell),
        View::Contact => render_contact(frame, main, shell),
    }

    render_footer(frame, footer, shell);

    if shell.preview_overlay_visible() {
        render_preview_overlay(frame, main, shell);
    }
    if shell.nav_overlay_is_open() {
        render_nav_overlay(frame, main, shell);
    }
}

fn render_home(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let profile = &shell.portfolio.profile;
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", profile.role, profile.location),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("( portrait: {} )", shell.assets.avatar),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "( manifesto )",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for wrapped in wrap_text(profile.about.as_str(), area.width.saturating_sub(4)) {
        lines.push(Line::from(wrapped));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "( capabilities )",
        Style::default().fg(Color::DarkGray),
    )));

    for (row_index, row) in shell.portfolio.skill_rows.iter().enumerate() {
        let mut spans = vec![Span::raw("  ".repeat(row_index + 1))];
        for (col_index, key) in row.iter().enumerate() {
            let selected = shell.selected_skill == Some((row_index, col_index));
            let style = if selected {
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("[{}]", key.name), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if let Some((row, col)) = shell.selected_skill {
        if let Some(key) = shell
            .portfolio
            .skill_rows
            .get(row)
            .and_then(|keys| keys.get(col))
        {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} — {}% proficiency", key.name, key.level),
                Style::default().fg(Color::LightGreen),
            )));
        }
    }

    lines.push(Line::from(""));
    let social = &profile.social;
    lines.push(Line::from(Span::styled(
        format!("github {}  ·  linkedin {}", social.github, social.linkedin),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "leetcode {}  ·  gfg {}",
            social.leetcode, social.geeksforgeeks
        ),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("home").borders(Borders::ALL)),
        area,
    );
}

fn render_projects(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("selected works · total {} projects", shell.portfolio.projects.len()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (index, project) in shell.portfolio.projects.iter().enumerate() {
        let selected = index == shell.selected_project;
        let marker = if selected { "› " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(project.title.clone(), title_style),
            Span::styled(
                format!("  — {}", project.subtitle),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {} · {}", project.tech.join(" / "), project.date),
            Style::default().fg(Color::DarkGray),
        )));

        let mut link_parts = Vec::new();
        if let Some(live) = project.live_preview_url() {
            link_parts.push(format!("live {live}"));
        }
        if let Some(github) = project.links.github.as_deref() {
            link_parts.push(format!("code {github}"));
        }
        if !link_parts.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", link_parts.join("  ·  ")),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "enter: live preview · ↑/↓: select",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("projects").borders(Borders::ALL)),
        area,
    );
}

fn render_resume(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let portfolio = &shell.portfolio;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("download: {}", shell.assets.resume_pdf),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section_heading("01 / experience"),
    ];

    for experience in &portfolio.experience {
        lines.push(Line::from(Span::styled(
            experience.role.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "{} · {} · {}",
                experience.company, experience.location, experience.date
            ),
            Style::default().fg(Color::DarkGray),
        )));
        for point in &experience.points {
            for (offset, wrapped) in
                wrap_text(point.as_str(), area.width.saturating_sub(8)).into_iter().enumerate()
            {
                let prefix = if offset == 0 { "  • " } else { "    " };
                lines.push(Line::from(format!("{prefix}{wrapped}")));
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(section_heading("02 / honors"));
    for achievement in &portfolio.achievements {
        lines.push(Line::from(vec![
            Span::styled(
                achievement.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", achievement.event, achievement.date),
                Style::default().fg(Color::LightGreen),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", achievement.description),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(section_heading("03 / gallery"));
    if shell.carousel.len() > 0 {
        let slide = shell
            .assets
            .gallery
            .get(shell.carousel.index())
            .map(String::as_str)
            .unwrap_or(shell.assets.placeholder.as_str());
        lines.push(Line::from(vec![
            Span::raw(format!("  {slide}  ")),
            Span::styled(
                format!("{} / {}", shell.carousel.index() + 1, shell.carousel.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "  ←/→ browse · home/end jump",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(section_heading("04 / education"));
    for education in &portfolio.education {
        lines.push(Line::from(vec![
            Span::styled(
                education.institution.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {} · {}", education.degree, education.date, education.score),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .scroll((shell.resume_scroll, 0))
            .block(Block::default().title("resume").borders(Borders::ALL)),
        area,
    );
}

fn render_chat(frame: &mut Frame, area: Rect, shell: &mut ShellState) {
    let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]);
    let [transcript_area, input_area] = layout.areas(area);

    let assistant_label = shell.portfolio.assistant.name.to_uppercase();
    let label_width = assistant_label.len().max(3) + 2;
    let text_width = transcript_area
        .width
        .saturating_sub(label_width as u16 + 10)
        .max(16);
    let time_format = format_description!("[hour]:[minute]");

    let mut lines: Vec<Line> = Vec::new();
    let messages = shell.transcript.messages();
    for message in messages {
        let (label, label_style, text_style) = match message.role {
            ChatRole::User => (
                "YOU".to_owned(),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            ),
            ChatRole::Model => (
                assistant_label.clone(),
                Style::default().fg(Color::LightGreen),
                Style::default(),
            ),
        };
        let stamp = message
            .timestamp
            .format(&time_format)
            .unwrap_or_default();

        for (offset, wrapped) in wrap_text(message.text.as_str(), text_width).into_iter().enumerate()
        {
            if offset == 0 {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:<label_width$}"), label_style),
                    Span::styled(wrapped, text_style),
                    Span::styled(format!("  {stamp}"), Style::default().fg(Color::DarkGray)),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(label_width)),
                    Span::styled(wrapped, text_style),
                ]));
            }
        }
    }
    if shell.is_chat_loading() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{assistant_label:<label_width$}"),
                Style::default().fg(Color::LightGreen),
            ),
            Span::styled("Thinking...", Style::default().fg(Color::DarkGray)),
        ]));
    }

    if lines.len() > shell.transcript_line_limit {
        let excess = lines.len() - shell.transcript_line_limit;
        lines.drain(..excess);
    }

    // Stick to the newest message unless the user scrolled away.
    let viewport = usize::from(transcript_area.height.saturating_sub(2)).max(1);
    let max_scroll = lines.len().saturating_sub(viewport);
    if shell.chat_follow {
        shell.chat_scroll = max_scroll;
    } else {
        shell.chat_scroll = shell.chat_scroll.min(max_scroll);
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .scroll((shell.chat_scroll as u16, 0))
            .block(
                Block::default()
                    .title(shell.portfolio.assistant.name.as_str())
                    .borders(Borders::ALL),
            ),
        transcript_area,
    );

    frame.render_widget(
        Paragraph::new(format!("› {}", shell.chat_input)).block(
            Block::default()
                .title("message (enter send)")
                .borders(Borders::ALL),
        ),
        input_area,
    );
}

fn render_contact(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let contact = &shell.contact;
    let mut lines = vec![
        Line::from(Span::styled(
            "Let's build.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "available for global commissions",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (label, value, focused) in contact.entries() {
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{label:<13}"), label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    let status_line = match contact.status {
        SubmissionStatus::Idle => Line::from(Span::styled(
            "tab: next field · enter: send",
            Style::default().fg(Color::DarkGray),
        )),
        SubmissionStatus::Submitting => Line::from(Span::styled(
            "Sending...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionStatus::Success => Line::from(Span::styled(
            "✓ Message sent successfully! I'll get back to you soon.",
            Style::default().fg(Color::LightGreen),
        )),
        SubmissionStatus::Error => Line::from(Span::styled(
            "✗ Failed to send message. Please try again or email me directly.",
            Style::default().fg(Color::LightRed),
        )),
    };
    lines.push(status_line);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("or reach me directly at {}", shell.portfolio.profile.email),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("contact").borders(Borders::ALL)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let footer_text = format!(
        "status: {} | view: {} | {}",
        shell.status_text(),
        shell.current_view().label(),
        view_help(shell.current_view())
    );
    frame.render_widget(
        Paragraph::new(footer_text)
            .block(Block::default().title("folio").borders(Borders::ALL)),
        area,
    );
}

fn view_help(view: View) -> &'static str {
    match view {
        View::Home => "1-5: views · arrows: skills · m: menu · q: quit",
        View::Projects => "↑/↓: select · enter: preview · esc: dismiss/menu",
        View::Resume => "↑/↓: scroll · ←/→: gallery · m: menu",
        View::AiChat => "type + enter: send · ↑/↓: scroll · esc: menu",
        View::Contact => "tab: field · enter: send · esc: menu",
    }
}

fn render_nav_overlay(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let overlay = centered_rect(40, 50, area);
    frame.render_widget(Clear, overlay);

    let selected = shell.nav_overlay_index().unwrap_or(0);
    let mut lines = Vec::new();
    for (index, view) in View::ALL.iter().enumerate() {
        let current = *view == shell.current_view();
        let style = if index == selected {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else if current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if current { "*" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" 0{} {} {}", index + 1, marker, view.label()),
            style,
        )));
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().title("menu").borders(Borders::ALL)),
        overlay,
    );
}

fn render_preview_overlay(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let Some(url) = shell.active_preview() else {
        return;
    };
    let overlay = centered_rect(70, 40, area);
    frame.render_widget(Clear, overlay);

    let lines = vec![
        Line::from(Span::styled(
            url.to_owned(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "read-only embedded view · the target page cannot reach this terminal",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "esc: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("live preview").borders(Borders::ALL)),
        overlay,
    );
}

fn section_heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_owned(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ]);
    let [_, middle, _] = vertical.areas(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ]);
    let [_, center, _] = horizontal.areas(middle);
    center
}

/// Greedy word wrap; a word longer than the width gets its own line.
pub(crate) fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_owned();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_owned();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
