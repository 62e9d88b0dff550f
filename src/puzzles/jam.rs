use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::str::FromStr;

use im::HashMap;

use crate::error::{LayoutError, Result};
use crate::solver::config::Configuration;

/// One car on the Traffic Jam board. A car occupies the inclusive run of
/// cells between its start and end coordinates along its fixed axis; the
/// axis is derived from whether the two rows coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car {
    pub name: char,
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    pub horizontal: bool,
}

impl Car {
    pub fn new(name: char, start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            name,
            start_row,
            start_col,
            end_row,
            end_col,
            horizontal: start_row == end_row,
        }
    }

    /// Returns this car shifted one cell along its axis. Callers check
    /// bounds and blockage first; `delta` is always -1 or 1.
    fn shifted(&self, delta: isize) -> Self {
        let mut car = *self;
        if car.horizontal {
            car.start_col = car.start_col.wrapping_add_signed(delta);
            car.end_col = car.end_col.wrapping_add_signed(delta);
        } else {
            car.start_row = car.start_row.wrapping_add_signed(delta);
            car.end_row = car.end_row.wrapping_add_signed(delta);
        }
        car
    }
}

/// A rejected interactive slide. The board is left untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlideError {
    #[error("({0}, {1}) is outside the board")]
    OutOfBounds(usize, usize),
    #[error("no car at ({0}, {1})")]
    NoCar(usize, usize),
    #[error("car {0} only moves along its own axis")]
    WrongAxis(char),
    #[error("destination must lie beyond one end of car {0}")]
    InsideCar(char),
    #[error("car {0} is blocked in that direction")]
    Blocked(char),
}

/// The direction a successful slide moved its car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One board state of the Traffic Jam puzzle.
///
/// The car map is the source of truth; the cell grid is a derived cache
/// rebuilt after every move, kept only to answer occupancy queries in
/// constant time. The puzzle is won when the escape car `X` reaches the
/// rightmost column.
#[derive(Debug, Clone)]
pub struct JamConfig {
    rows: usize,
    cols: usize,
    cars: HashMap<char, Car>,
    board: Vec<Option<char>>,
}

impl JamConfig {
    /// Builds a board from its dimensions and car list.
    pub fn new(rows: usize, cols: usize, car_list: Vec<Car>) -> std::result::Result<Self, LayoutError> {
        let mut cars = HashMap::new();
        for car in car_list {
            if car.end_row >= rows || car.end_col >= cols {
                return Err(LayoutError::CarOutOfBounds {
                    name: car.name,
                    rows,
                    cols,
                });
            }
            cars.insert(car.name, car);
        }
        let mut config = Self {
            rows,
            cols,
            cars,
            board: vec![None; rows * cols],
        };
        config.rebuild_board();
        Ok(config)
    }

    /// Reads a layout file: a `rows cols` header, a car-count line, then
    /// one `name startRow startCol endRow endCol` descriptor per car.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(LayoutError::Io)?;
        Ok(text.parse::<Self>()?)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the name of the car occupying `(row, col)`, or `None` for
    /// an empty in-bounds cell; out-of-bounds is also `None`.
    pub fn car_at(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.board[row * self.cols + col]
        } else {
            None
        }
    }

    pub fn car(&self, name: char) -> Option<&Car> {
        self.cars.get(&name)
    }

    /// Re-derives the cell grid from the car map. Every mutation of the
    /// map goes through here, keeping the cache consistent.
    fn rebuild_board(&mut self) {
        self.board.iter_mut().for_each(|cell| *cell = None);
        for car in self.cars.values() {
            if car.horizontal {
                for col in car.start_col..=car.end_col {
                    self.board[car.start_row * self.cols + col] = Some(car.name);
                }
            } else {
                for row in car.start_row..=car.end_row {
                    self.board[row * self.cols + car.start_col] = Some(car.name);
                }
            }
        }
    }

    fn is_free(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.board[row * self.cols + col].is_none()
    }

    fn with_car_moved(&self, car: &Car, delta: isize) -> Self {
        let mut next = self.clone();
        next.cars.insert(car.name, car.shifted(delta));
        next.rebuild_board();
        next
    }

    /// Validates and applies one user-requested slide: select the car at
    /// `from`, push it one cell toward `dest`. The live-play counterpart
    /// of the search moves, with the same legality rules.
    pub fn slide(
        &mut self,
        from: (usize, usize),
        dest: (usize, usize),
    ) -> std::result::Result<Direction, SlideError> {
        if from.0 >= self.rows || from.1 >= self.cols {
            return Err(SlideError::OutOfBounds(from.0, from.1));
        }
        let name = self
            .car_at(from.0, from.1)
            .ok_or(SlideError::NoCar(from.0, from.1))?;
        // The name came from the board cache, so the lookup cannot miss.
        let Some(car) = self.cars.get(&name).copied() else {
            return Err(SlideError::NoCar(from.0, from.1));
        };

        let (delta, direction) = if car.horizontal {
            if dest.0 != car.start_row {
                return Err(SlideError::WrongAxis(name));
            }
            if dest.1 > car.end_col {
                (1, Direction::Right)
            } else if dest.1 < car.start_col {
                (-1, Direction::Left)
            } else {
                return Err(SlideError::InsideCar(name));
            }
        } else {
            if dest.1 != car.start_col {
                return Err(SlideError::WrongAxis(name));
            }
            if dest.0 > car.end_row {
                (1, Direction::Down)
            } else if dest.0 < car.start_row {
                (-1, Direction::Up)
            } else {
                return Err(SlideError::InsideCar(name));
            }
        };

        let open = match direction {
            Direction::Right => self.is_free(car.start_row, car.end_col + 1),
            Direction::Left => car.start_col > 0 && self.is_free(car.start_row, car.start_col - 1),
            Direction::Down => self.is_free(car.end_row + 1, car.start_col),
            Direction::Up => car.start_row > 0 && self.is_free(car.start_row - 1, car.start_col),
        };
        if !open {
            return Err(SlideError::Blocked(name));
        }

        self.cars.insert(name, car.shifted(delta));
        self.rebuild_board();
        Ok(direction)
    }
}

impl Configuration for JamConfig {
    /// Each car contributes at most two neighbors: one slide toward each
    /// open cell beyond its ends. Cars are visited in name order so the
    /// expansion order is reproducible.
    fn neighbors(&self) -> Vec<Self> {
        let mut cars: Vec<&Car> = self.cars.values().collect();
        cars.sort_by_key(|car| car.name);

        let mut configs = Vec::new();
        for car in cars {
            if car.horizontal {
                if car.start_col > 0 && self.is_free(car.start_row, car.start_col - 1) {
                    configs.push(self.with_car_moved(car, -1));
                }
                if self.is_free(car.start_row, car.end_col + 1) {
                    configs.push(self.with_car_moved(car, 1));
                }
            } else {
                if car.start_row > 0 && self.is_free(car.start_row - 1, car.start_col) {
                    configs.push(self.with_car_moved(car, -1));
                }
                if self.is_free(car.end_row + 1, car.start_col) {
                    configs.push(self.with_car_moved(car, 1));
                }
            }
        }
        configs
    }

    fn is_goal(&self) -> bool {
        self.cars
            .get(&'X')
            .map_or(false, |car| car.end_col == self.cols - 1)
    }
}

// Structural identity lives in the derived cell grid: two boards with the
// same occupancy are the same state regardless of map internals.
impl PartialEq for JamConfig {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.board == other.board
    }
}

impl Eq for JamConfig {}

impl Hash for JamConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.board.hash(state);
    }
}

impl FromStr for JamConfig {
    type Err = LayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(LayoutError::MissingHeader)?;

        let mut fields = header.split_whitespace();
        let dimension = |field: Option<&str>| {
            field
                .ok_or_else(|| LayoutError::BadDimension(header.to_string()))?
                .parse::<usize>()
                .map_err(|_| LayoutError::BadDimension(header.to_string()))
        };
        let rows = dimension(fields.next())?;
        let cols = dimension(fields.next())?;

        let count_line = lines.next().ok_or(LayoutError::MissingHeader)?;
        let expected: usize = count_line
            .trim()
            .parse()
            .map_err(|_| LayoutError::BadDimension(count_line.to_string()))?;

        let mut cars = Vec::with_capacity(expected);
        for line in lines.take(expected) {
            cars.push(parse_car(line)?);
        }
        if cars.len() != expected {
            return Err(LayoutError::CarCount {
                expected,
                found: cars.len(),
            });
        }

        Self::new(rows, cols, cars)
    }
}

fn parse_car(line: &str) -> std::result::Result<Car, LayoutError> {
    let bad = || LayoutError::BadCar(line.to_string());
    let mut fields = line.split_whitespace();
    let name = fields.next().and_then(|f| f.chars().next()).ok_or_else(bad)?;
    let mut coordinate = || {
        fields
            .next()
            .ok_or_else(bad)?
            .parse::<usize>()
            .map_err(|_| bad())
    };
    Ok(Car::new(
        name,
        coordinate()?,
        coordinate()?,
        coordinate()?,
        coordinate()?,
    ))
}

impl fmt::Display for JamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        write!(f, "  ")?;
        for _ in 0..self.cols {
            write!(f, "--")?;
        }
        writeln!(f, "-")?;
        for row in 0..self.rows {
            write!(f, "{row}|")?;
            for col in 0..self.cols {
                write!(f, " {}", self.board[row * self.cols + col].unwrap_or('.'))?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}
