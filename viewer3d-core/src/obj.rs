/// Wavefront OBJ loader producing an indexed [`Model`]
use std::fs;
use std::path::Path;

use log::{debug, info};
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, i64 as index, space0, space1},
    combinator::{all_consuming, opt},
    multi::many1,
    number::complete::double,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use crate::error::ObjError;
use crate::geometry::{Model, Point};

/// Read and parse an OBJ file from disk
pub fn load_obj(path: impl AsRef<Path>) -> Result<Model, ObjError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let model = parse_obj(&source)?;
    info!(
        "loaded {} vertices and {} faces from {}",
        model.vertices.len(),
        model.faces.len(),
        path.display()
    );
    Ok(model)
}

/// Parse OBJ source text.
///
/// Only geometry is kept: `v` statements become vertices in file order and
/// `f` statements become triangles (polygons are fan-triangulated). Other
/// statements are skipped.
pub fn parse_obj(source: &str) -> Result<Model, ObjError> {
    let mut model = Model::new();

    for (number, raw) in source.lines().enumerate() {
        let line_no = number + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let (rest, keyword) = keyword(line).map_err(|_| syntax_error(line_no, line))?;
        match keyword {
            "v" => {
                let (_, point) =
                    all_consuming(vertex)(rest).map_err(|_| syntax_error(line_no, keyword))?;
                // `double` also accepts nan and inf
                if !point.coords.iter().all(|c| c.is_finite()) {
                    return Err(ObjError::NonFinite { line: line_no });
                }
                model.add_vertex(point);
            }
            "f" => {
                let (_, refs) =
                    all_consuming(face)(rest).map_err(|_| syntax_error(line_no, keyword))?;
                add_polygon(&mut model, &refs, line_no)?;
            }
            other => debug!("line {}: skipping `{}` statement", line_no, other),
        }
    }

    Ok(model)
}

fn syntax_error(line: usize, statement: &str) -> ObjError {
    ObjError::Syntax {
        line,
        statement: statement.to_string(),
    }
}

fn add_polygon(model: &mut Model, refs: &[i64], line: usize) -> Result<(), ObjError> {
    if refs.len() < 3 {
        return Err(ObjError::DegenerateFace {
            line,
            count: refs.len(),
        });
    }

    let available = model.vertices.len();
    let indices = refs
        .iter()
        .map(|&raw| {
            resolve_index(raw, available).ok_or(ObjError::IndexOutOfRange {
                line,
                index: raw,
                available,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for i in 1..indices.len() - 1 {
        model.add_face([indices[0], indices[i], indices[i + 1]]);
    }
    Ok(())
}

/// Map a 1-based (or negative, relative) OBJ index to a vertex position
fn resolve_index(raw: i64, available: usize) -> Option<usize> {
    let resolved = match raw {
        0 => return None,
        r if r > 0 => usize::try_from(r - 1).ok()?,
        r => available.checked_sub(usize::try_from(r.unsigned_abs()).ok()?)?,
    };
    (resolved < available).then_some(resolved)
}

fn keyword(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

fn vertex(input: &str) -> IResult<&str, Point> {
    let (input, (x, y, z)) = tuple((
        preceded(space1, double),
        preceded(space1, double),
        preceded(space1, double),
    ))(input)?;
    // Optional homogeneous weight, ignored
    let (input, _) = opt(preceded(space1, double))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Point::new(x, y, z)))
}

fn face(input: &str) -> IResult<&str, Vec<i64>> {
    terminated(many1(preceded(space1, vertex_ref)), space0)(input)
}

/// `i`, `i/t`, `i//n` or `i/t/n`; only the position index is kept
fn vertex_ref(input: &str) -> IResult<&str, i64> {
    terminated(
        index,
        opt(pair(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}
