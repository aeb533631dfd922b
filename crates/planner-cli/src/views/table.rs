use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use comfy_table::{Cell, Color, Row, Table};
use planner_core::date::parse_date;
use planner_core::models::Task;

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Date", "When", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut title = String::new();
        if task.is_recurring() {
            title.push('↻');
            title.push(' ');
        }
        title.push_str(&task.title);
        row.add_cell(Cell::new(title));
        row.add_cell(Cell::new(&task.date));
        row.add_cell(when_cell(&task.date, today));
        row.add_cell(Cell::new(if task.repeat.is_empty() { "-" } else { task.repeat.as_str() }));
        row.add_cell(Cell::new(if task.comment.is_empty() { "-" } else { task.comment.as_str() }));
        table.add_row(row);
    }

    println!("{table}");
}

fn when_cell(date: &str, today: NaiveDate) -> Cell {
    let Ok(date) = parse_date(date) else {
        return Cell::new("?");
    };

    if date == today {
        return Cell::new("today").fg(Color::Yellow);
    }
    let text = HumanTime::from(date - today).to_string();
    if date < today {
        Cell::new(text).fg(Color::Red) // Overdue
    } else {
        Cell::new(text)
    }
}
