// src/noyau/trig.rs
//
// Trig en DEGRÉS avec angles “exactement reconnus”
// -----------------------------------------------
// - Réduction modulo 360° (exacte en flottant : fmod)
// - Table angles remarquables : multiples entiers de 30° et 45°
// - Pôles : tan(90° + k·180°), cot(k·180°) => indéfini
// - Hors table : calcul f64 standard (radians)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Cot,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome {
    Valeur(f64),
    Indefini,
}

/// Évalue f(degres). Toujours une réponse : table si l’angle est remarquable, sinon calcul.
pub fn trig_degres(degres: f64, f: TrigFn) -> TrigOutcome {
    if let Some(out) = trig_special(degres, f) {
        return out;
    }

    let r = degres.rem_euclid(360.0).to_radians();
    let v = match f {
        TrigFn::Sin => r.sin(),
        TrigFn::Cos => r.cos(),
        TrigFn::Tan => r.tan(),
        TrigFn::Cot => 1.0 / r.tan(),
    };
    TrigOutcome::Valeur(v)
}

/// Reconnaît les angles remarquables (en degrés).
///
/// Retour:
/// - Some(Valeur(v)) si la valeur exacte est un rationnel simple (0, ±1/2, ±1)
/// - Some(Indefini) sur un pôle
/// - None si non reconnu (√2/2, √3/2… : le calcul f64 fait aussi bien)
pub fn trig_special(degres: f64, f: TrigFn) -> Option<TrigOutcome> {
    let a = angle_remarquable(degres)?;

    let v = |x: f64| Some(TrigOutcome::Valeur(x));

    match f {
        TrigFn::Sin => match a {
            0 | 180 => v(0.0),
            30 | 150 => v(0.5),
            210 | 330 => v(-0.5),
            90 => v(1.0),
            270 => v(-1.0),
            _ => None,
        },

        TrigFn::Cos => match a {
            0 => v(1.0),
            180 => v(-1.0),
            90 | 270 => v(0.0),
            60 | 300 => v(0.5),
            120 | 240 => v(-0.5),
            _ => None,
        },

        TrigFn::Tan => match a {
            0 | 180 => v(0.0),
            45 | 225 => v(1.0),
            135 | 315 => v(-1.0),
            90 | 270 => Some(TrigOutcome::Indefini),
            _ => None,
        },

        TrigFn::Cot => match a {
            90 | 270 => v(0.0),
            45 | 225 => v(1.0),
            135 | 315 => v(-1.0),
            0 | 180 => Some(TrigOutcome::Indefini),
            _ => None,
        },
    }
}

/* ------------------------ Outils ------------------------ */

/// Angle entier réduit dans [0, 360) s’il est multiple de 30° ou de 45°.
fn angle_remarquable(degres: f64) -> Option<i64> {
    if !degres.is_finite() || degres.fract() != 0.0 {
        return None;
    }
    let a = degres.rem_euclid(360.0) as i64;
    if a % 30 == 0 || a % 45 == 0 {
        Some(a)
    } else {
        None
    }
}
