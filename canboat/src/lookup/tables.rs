use super::LookupTable;

pub static INDUSTRY_CODE: LookupTable = LookupTable::pair(
    "INDUSTRY_CODE",
    &[
        (0, "Global"),
        (1, "Highway"),
        (2, "Agriculture"),
        (3, "Construction"),
        (4, "Marine"),
        (5, "Industrial"),
    ],
);

pub static MANUFACTURER_CODE: LookupTable = LookupTable::pair(
    "MANUFACTURER_CODE",
    &[
        (69, "ARKS Enterprises, Inc."),
        (78, "FW Murphy/Enovation Controls"),
        (80, "Twin Disc"),
        (85, "Kohler Power Systems"),
        (88, "Hemisphere GPS Inc"),
        (116, "BEP Marine"),
        (135, "Airmar"),
        (137, "Maretron"),
        (140, "Lowrance"),
        (144, "Mercury Marine"),
        (147, "Nautibus Electronic GmbH"),
        (148, "Blue Water Data"),
        (154, "Westerbeke"),
        (161, "Offshore Systems (UK) Ltd."),
        (163, "Evinrude/BRP"),
        (165, "CPAC Systems AB"),
        (168, "Xantrex Technology Inc."),
        (172, "Yanmar Marine"),
        (174, "Volvo Penta"),
        (175, "Honda Marine"),
        (176, "Carling Technologies Inc. (Moritz Aerospace)"),
        (185, "Beede Instruments"),
        (192, "Floscan Instrument Co. Inc."),
        (193, "Nobletec"),
        (198, "Mystic Valley Communications"),
        (199, "Actia"),
        (211, "Digital Switching Systems"),
        (215, "Xintex/Atlantic Oceanic"),
        (224, "EMMI NETWORK S.L."),
        (228, "ZF"),
        (229, "Garmin"),
        (233, "Yacht Monitoring Solutions"),
        (235, "Sailormade Marine Telemetry/Tetra Technology LTD"),
        (243, "Eride"),
        (257, "Honda Motor Company LTD"),
        (272, "Groco"),
        (273, "Actisense"),
        (274, "Amphenol LTW Technology"),
        (275, "Navico"),
        (283, "Hamilton Jet"),
        (285, "Sea Recovery"),
        (286, "Coelmo SRL Italy"),
        (295, "BEP Marine"),
        (304, "Empir Bus"),
        (305, "NovAtel"),
        (306, "Sleipner Motor AS"),
        (307, "MBW Technologies"),
        (315, "ICOM"),
        (328, "Qwerty"),
        (329, "Dief"),
        (341, "Boening Automationstechnologie GmbH & Co. KG"),
        (345, "Korean Maritime University"),
        (351, "Thrane and Thrane"),
        (355, "Mastervolt"),
        (356, "Fischer Panda Generators"),
        (358, "Victron Energy"),
        (370, "Rolls Royce Marine"),
        (373, "Electronic Design"),
        (374, "Northern Lights"),
        (378, "Glendinning"),
        (381, "B & G"),
        (384, "Rose Point Navigation Systems"),
        (385, "Johnson Outdoors Marine Electronics Inc Geonav"),
        (394, "Capi 2"),
        (396, "Beyond Measure"),
        (400, "Livorsi Marine"),
        (404, "ComNav"),
        (409, "Chetco"),
        (419, "Fusion Electronics"),
        (421, "Standard Horizon"),
        (422, "True Heading AB"),
        (426, "Egersund Marine Electronics AS"),
        (427, "em-trak Marine Electronics"),
        (431, "Tohatsu Co, JP"),
        (437, "Digital Yacht"),
        (438, "Comar Systems Limited"),
        (440, "Cummins"),
        (443, "VDO (aka Continental-Corporation)"),
        (451, "Parker Hannifin aka Village Marine Tech"),
        (459, "Alltek Marine Electronics Corp"),
        (460, "SAN GIORGIO S.E.I.N"),
        (466, "Veethree Electronics & Marine"),
        (467, "Humminbird Marine Electronics"),
        (470, "SI-TEX Marine Electronics"),
        (471, "Sea Cross Marine AB"),
        (475, "GME aka Standard Communications Pty LTD"),
        (478, "Ocean Sat BV"),
        (481, "Chetco Digitial Instruments"),
        (493, "Watcheye"),
        (499, "Lcj Capteurs"),
        (502, "Attwood Marine"),
        (503, "Naviop S.R.L."),
        (504, "Vesper Marine Ltd"),
        (510, "Marinesoft Co. LTD"),
        (517, "NoLand Engineering"),
        (518, "Transas USA"),
        (529, "National Instruments Korea"),
        (532, "Onwa Marine"),
        (573, "McMurdo Group aka Orolia LTD"),
        (578, "Advansea"),
        (579, "KVH"),
        (580, "San Jose Technology"),
        (583, "Yacht Control"),
        (586, "Suzuki Motor Corporation"),
        (591, "US Coast Guard"),
        (595, "Ship Module aka Customware"),
        (600, "Aquatic AV"),
        (605, "Aventics GmbH"),
        (606, "Intellian"),
        (612, "SamwonIT"),
        (614, "Arlt Tecnologies"),
        (637, "Bavaria Yacts"),
        (641, "Diverse Yacht Services"),
        (644, "Wema U.S.A dba KUS"),
        (645, "Garmin"),
        (658, "Shenzhen Jiuzhou Himunication"),
        (688, "Rockford Corp"),
        (704, "JL Audio"),
        (715, "Autonnic"),
        (717, "Yacht Devices"),
        (734, "REAP Systems"),
        (735, "Au Electronics Group"),
        (739, "LxNav"),
        (743, "DaeMyung"),
        (744, "Woosung"),
        (773, "Clarion US"),
        (776, "HMI Systems"),
        (777, "Ocean Signal"),
        (778, "Seekeeper"),
        (781, "Poly Planar"),
        (785, "Fischer Panda DE"),
        (795, "Broyda Industries"),
        (796, "Canadian Automotive"),
        (797, "Tides Marine"),
        (798, "Lumishore"),
        (799, "Still Water Designs and Audio"),
        (802, "BJ Technologies (Beneteau)"),
        (803, "Gill Sensors"),
        (811, "Blue Water Desalination"),
        (815, "FLIR"),
        (824, "Undheim Systems"),
        (838, "TeamSurv"),
        (844, "Fell Marine"),
        (847, "Oceanvolt"),
        (862, "Prospec"),
        (868, "Data Panel Corp"),
        (890, "L3 Technologies"),
        (894, "Rhodan Marine Systems"),
        (896, "Nexfour Solutions"),
        (905, "ASA Electronics"),
        (909, "Marines Co (South Korea)"),
        (911, "Nautic-on"),
        (930, "Ecotronix"),
        (962, "Timbolier Industries"),
        (963, "TJC Micro"),
        (968, "Cox Powertrain"),
        (969, "Blue Seas"),
        (1850, "Teleflex Marine (SeaStar Solutions)"),
        (1851, "Raymarine"),
        (1852, "Navionics"),
        (1853, "Japan Radio Co"),
        (1854, "Northstar Technologies"),
        (1855, "Furuno"),
        (1856, "Trimble"),
        (1857, "Simrad"),
        (1858, "Litton"),
        (1859, "Kvasar AB"),
        (1860, "MMP"),
        (1861, "Vector Cantech"),
        (1862, "Yamaha Marine"),
        (1863, "Faria Instruments"),
    ],
);

pub static DEVICE_CLASS: LookupTable = LookupTable::pair(
    "DEVICE_CLASS",
    &[
        (0, "Reserved for 2000 Use"),
        (10, "System tools"),
        (20, "Safety systems"),
        (25, "Internetwork device"),
        (30, "Electrical Distribution"),
        (35, "Electrical Generation"),
        (40, "Steering and Control surfaces"),
        (50, "Propulsion"),
        (60, "Navigation"),
        (70, "Communication"),
        (75, "Sensor Communication Interface"),
        (80, "Instrumentation/general systems"),
        (85, "External Environment"),
        (90, "Internal Environment"),
        (100, "Deck + cargo + fishing equipment systems"),
        (110, "Human Interface"),
        (120, "Display"),
        (125, "Entertainment"),
    ],
);

/// Device function, keyed on (device class, function)
pub static DEVICE_FUNCTION: LookupTable = LookupTable::triplet(
    "DEVICE_FUNCTION",
    &[
        (10, 130, "Diagnostic"),
        (10, 140, "Bus Traffic Logger"),
        (20, 110, "Alarm Enunciator"),
        (20, 130, "Emergency Position Indicating Radio Beacon (EPIRB)"),
        (20, 135, "Man Overboard"),
        (20, 140, "Voyage Data Recorder"),
        (20, 150, "Camera"),
        (25, 130, "PC Gateway"),
        (25, 131, "NMEA 2000 to Analog Gateway"),
        (25, 132, "Analog to NMEA 2000 Gateway"),
        (25, 133, "NMEA 2000 to Serial Gateway"),
        (25, 135, "NMEA 0183 Gateway"),
        (25, 136, "NMEA Network Gateway"),
        (25, 137, "NMEA 2000 Wireless Gateway"),
        (25, 140, "Router"),
        (25, 150, "Bridge"),
        (25, 160, "Repeater"),
        (30, 130, "Binary Event Monitor"),
        (30, 140, "Load Controller"),
        (30, 141, "AC/DC Input"),
        (30, 150, "Function Controller"),
        (35, 140, "Engine"),
        (35, 141, "DC Generator/Alternator"),
        (35, 142, "Solar Panel (Solar Array)"),
        (35, 143, "Wind Generator (DC)"),
        (35, 144, "Fuel Cell"),
        (35, 145, "Network Power Supply"),
        (35, 151, "AC Generator"),
        (35, 152, "AC Bus"),
        (35, 153, "AC Mains (Utility/Shore)"),
        (35, 154, "AC Output"),
        (35, 160, "Power Converter - Battery Charger"),
        (35, 161, "Power Converter - Battery Charger+Inverter"),
        (35, 162, "Power Converter - Inverter"),
        (35, 163, "Power Converter DC"),
        (35, 170, "Battery"),
        (35, 180, "Engine Gateway"),
        (40, 130, "Follow-up Controller"),
        (40, 140, "Mode Controller"),
        (40, 150, "Autopilot"),
        (40, 155, "Rudder"),
        (40, 160, "Heading Sensors"),
        (40, 170, "Trim (Tabs)/Interceptors"),
        (40, 180, "Attitude (Pitch, Roll) Control"),
        (50, 130, "Engineroom Monitoring"),
        (50, 140, "Engine"),
        (50, 141, "DC Generator/Alternator"),
        (50, 150, "Engine Controller"),
        (50, 151, "AC Generator"),
        (50, 155, "Motor"),
        (50, 160, "Engine Gateway"),
        (50, 165, "Transmission"),
        (50, 170, "Throttle/Shift Control"),
        (50, 180, "Actuator"),
        (50, 190, "Gauge Interface"),
        (50, 200, "Gauge Large"),
        (50, 210, "Gauge Small"),
        (60, 130, "Bottom Depth"),
        (60, 135, "Bottom Depth/Speed"),
        (60, 136, "Bottom Depth/Speed/Temperature"),
        (60, 140, "Ownship Attitude"),
        (60, 145, "Ownship Position (GNSS)"),
        (60, 150, "Ownship Position (Loran C)"),
        (60, 155, "Speed"),
        (60, 160, "Turn Rate Indicator"),
        (60, 170, "Integrated Navigation"),
        (60, 175, "Integrated Navigation System"),
        (60, 190, "Navigation Management"),
        (60, 195, "Automatic Identification System (AIS)"),
        (60, 200, "Radar"),
        (60, 201, "Infrared Imaging"),
        (60, 205, "ECDIS"),
        (60, 206, "ECS"),
        (60, 207, "Direction Finder"),
        (60, 210, "Voyage Status"),
        (70, 130, "EPIRB"),
        (70, 140, "AIS"),
        (70, 150, "DSC"),
        (70, 160, "Data Receiver/Transceiver"),
        (70, 170, "Satellite"),
        (70, 180, "Radio-telephone (MF/HF)"),
        (70, 190, "Radiotelephone"),
        (75, 130, "Temperature"),
        (75, 140, "Pressure"),
        (75, 150, "Fluid Level"),
        (75, 160, "Flow"),
        (75, 170, "Humidity"),
        (80, 130, "Time/Date Systems"),
        (80, 140, "VDR"),
        (80, 150, "Integrated Instrumentation"),
        (80, 160, "General Purpose Displays"),
        (80, 170, "General Sensor Box"),
        (80, 180, "Weather Instruments"),
        (80, 190, "Transducer/General"),
        (80, 200, "NMEA 0183 Converter"),
        (85, 130, "Atmospheric"),
        (85, 160, "Aquatic"),
        (90, 130, "HVAC"),
        (100, 130, "Scale (Catch)"),
        (110, 130, "Button Interface"),
        (110, 135, "Switch Interface"),
        (110, 140, "Analog Interface"),
        (120, 130, "Display"),
        (120, 140, "Alarm Enunciator"),
        (125, 130, "Multimedia Player"),
        (125, 140, "Multimedia Controller"),
    ],
);

pub static ISO_CONTROL: LookupTable = LookupTable::pair(
    "ISO_CONTROL",
    &[(0, "ACK"), (1, "NAK"), (2, "Access Denied"), (3, "Address Busy")],
);

pub static ISO_COMMAND: LookupTable = LookupTable::pair(
    "ISO_COMMAND",
    &[(16, "RTS"), (17, "CTS"), (19, "EOM"), (32, "BAM"), (255, "Abort")],
);

pub static GROUP_FUNCTION: LookupTable = LookupTable::pair(
    "GROUP_FUNCTION",
    &[
        (0, "Request"),
        (1, "Command"),
        (2, "Acknowledge"),
        (3, "Read Fields"),
        (4, "Read Fields Reply"),
        (5, "Write Fields"),
        (6, "Write Fields Reply"),
    ],
);

pub static PGN_ERROR_CODE: LookupTable = LookupTable::pair(
    "PGN_ERROR_CODE",
    &[
        (0, "Acknowledge"),
        (1, "PGN not supported"),
        (2, "PGN not available"),
        (3, "Access denied"),
        (4, "Not supported"),
        (5, "Tag not supported"),
        (6, "Read or Write not supported"),
    ],
);

pub static TRANSMISSION_INTERVAL: LookupTable = LookupTable::pair(
    "TRANSMISSION_INTERVAL",
    &[
        (0, "Acknowledge"),
        (1, "Transmit Interval/Priority not supported"),
        (2, "Transmit Interval too low"),
        (3, "Access denied"),
        (4, "Not supported"),
    ],
);

pub static PARAMETER_FIELD: LookupTable = LookupTable::pair(
    "PARAMETER_FIELD",
    &[
        (0, "Acknowledge"),
        (1, "Invalid parameter field"),
        (2, "Temporarily unable to comply"),
        (3, "Parameter data out of range"),
        (4, "Access denied"),
        (5, "Not supported"),
        (6, "Read or Write not supported"),
    ],
);

pub static PRIORITY: LookupTable = LookupTable::pair(
    "PRIORITY",
    &[
        (0, "0"),
        (1, "1"),
        (2, "2"),
        (3, "3"),
        (4, "4"),
        (5, "5"),
        (6, "6"),
        (7, "7"),
        (8, "Leave unchanged"),
        (9, "Reset to default"),
    ],
);

pub static PGN_LIST_FUNCTION: LookupTable = LookupTable::pair(
    "PGN_LIST_FUNCTION",
    &[(0, "Transmit PGN list"), (1, "Receive PGN list")],
);

pub static CONTROLLER_STATE: LookupTable = LookupTable::pair(
    "CONTROLLER_STATE",
    &[(0, "Error Active"), (1, "Error Passive"), (2, "Bus Off")],
);

pub static EQUIPMENT_STATUS: LookupTable = LookupTable::pair("EQUIPMENT_STATUS", &[(0, "Operational"), (1, "Fault")]);

pub static CERTIFICATION_LEVEL: LookupTable = LookupTable::pair("CERTIFICATION_LEVEL", &[(0, "Level A"), (1, "Level B")]);

pub static SYSTEM_TIME: LookupTable = LookupTable::pair(
    "SYSTEM_TIME",
    &[
        (0, "GPS"),
        (1, "GLONASS"),
        (2, "Radio Station"),
        (3, "Local Cesium clock"),
        (4, "Local Rubidium clock"),
        (5, "Local Crystal clock"),
    ],
);

pub static DIRECTION_REFERENCE: LookupTable =
    LookupTable::pair("DIRECTION_REFERENCE", &[(0, "True"), (1, "Magnetic"), (2, "Error")]);

pub static YES_NO: LookupTable = LookupTable::pair("YES_NO", &[(0, "No"), (1, "Yes")]);

pub static OFF_ON: LookupTable = LookupTable::pair("OFF_ON", &[(0, "Off"), (1, "On")]);

pub static AVAILABLE: LookupTable = LookupTable::pair("AVAILABLE", &[(0, "Available"), (1, "Not available")]);

pub static POWER_FACTOR: LookupTable =
    LookupTable::pair("POWER_FACTOR", &[(0, "Leading"), (1, "Lagging"), (2, "Error")]);

pub static STEERING_MODE: LookupTable = LookupTable::pair(
    "STEERING_MODE",
    &[
        (0, "Main Steering"),
        (1, "Non-Follow-up Device"),
        (2, "Follow-up Device"),
        (3, "Heading Control Standalone"),
        (4, "Heading Control"),
        (5, "Track Control"),
    ],
);

pub static TURN_MODE: LookupTable = LookupTable::pair(
    "TURN_MODE",
    &[(0, "Rudder Limit controlled"), (1, "turn rate controlled"), (2, "radius controlled")],
);

pub static DIRECTION_RUDDER: LookupTable = LookupTable::pair(
    "DIRECTION_RUDDER",
    &[(0, "No Order"), (1, "Move to starboard"), (2, "Move to port")],
);

pub static MAGNETIC_VARIATION: LookupTable = LookupTable::pair(
    "MAGNETIC_VARIATION",
    &[
        (0, "Manual"),
        (1, "Automatic Chart"),
        (2, "Automatic Table"),
        (3, "Automatic Calculation"),
        (4, "WMM 2000"),
        (5, "WMM 2005"),
        (6, "WMM 2010"),
        (7, "WMM 2015"),
        (8, "WMM 2020"),
    ],
);

pub static ENGINE_INSTANCE: LookupTable = LookupTable::pair(
    "ENGINE_INSTANCE",
    &[(0, "Single Engine or Dual Engine Port"), (1, "Dual Engine Starboard")],
);

pub static GEAR_STATUS: LookupTable = LookupTable::pair("GEAR_STATUS", &[(0, "Forward"), (1, "Neutral"), (2, "Reverse")]);

pub static ENGINE_STATUS_1: LookupTable = LookupTable::bits(
    "ENGINE_STATUS_1",
    &[
        (0, "Check Engine"),
        (1, "Over Temperature"),
        (2, "Low Oil Pressure"),
        (3, "Low Oil Level"),
        (4, "Low Fuel Pressure"),
        (5, "Low System Voltage"),
        (6, "Low Coolant Level"),
        (7, "Water Flow"),
        (8, "Water In Fuel"),
        (9, "Charge Indicator"),
        (10, "Preheat Indicator"),
        (11, "High Boost Pressure"),
        (12, "Rev Limit Exceeded"),
        (13, "EGR System"),
        (14, "Throttle Position Sensor"),
        (15, "Emergency Stop"),
    ],
);

pub static ENGINE_STATUS_2: LookupTable = LookupTable::bits(
    "ENGINE_STATUS_2",
    &[
        (0, "Warning Level 1"),
        (1, "Warning Level 2"),
        (2, "Power Reduction"),
        (3, "Maintenance Needed"),
        (4, "Engine Comm Error"),
        (5, "Sub or Secondary Throttle"),
        (6, "Neutral Start Protect"),
        (7, "Engine Shutting Down"),
    ],
);

pub static TRANSMISSION_STATUS: LookupTable = LookupTable::bits(
    "TRANSMISSION_STATUS",
    &[
        (0, "Check Temperature"),
        (1, "Over Temperature"),
        (2, "Low Oil Pressure"),
        (3, "Low Oil Level"),
        (4, "Sail Drive"),
    ],
);

pub static TANK_TYPE: LookupTable = LookupTable::pair(
    "TANK_TYPE",
    &[
        (0, "Fuel"),
        (1, "Water"),
        (2, "Gray water"),
        (3, "Live well"),
        (4, "Oil"),
        (5, "Black water"),
        (6, "Gasoline fuel"),
        (14, "Error"),
        (15, "Unavailable"),
    ],
);

pub static DC_SOURCE: LookupTable = LookupTable::pair(
    "DC_SOURCE",
    &[
        (0, "Battery"),
        (1, "Alternator"),
        (2, "Convertor"),
        (3, "Solar Cell"),
        (4, "Wind Generator"),
    ],
);

pub static CHARGER_STATE: LookupTable = LookupTable::pair(
    "CHARGER_STATE",
    &[
        (0, "Not charging"),
        (1, "Bulk"),
        (2, "Absorption"),
        (3, "Overcharge"),
        (4, "Equalise"),
        (5, "Float"),
        (6, "No Float"),
        (7, "Constant VI"),
        (8, "Disabled"),
        (9, "Fault"),
    ],
);

pub static CHARGER_MODE: LookupTable = LookupTable::pair(
    "CHARGER_MODE",
    &[(0, "Standalone"), (1, "Primary"), (2, "Secondary"), (3, "Echo")],
);

pub static INVERTER_STATE: LookupTable = LookupTable::pair(
    "INVERTER_STATE",
    &[
        (0, "Invert"),
        (1, "AC passthru"),
        (2, "Load sense"),
        (3, "Fault"),
        (4, "Disabled"),
    ],
);

pub static BATTERY_TYPE: LookupTable = LookupTable::pair("BATTERY_TYPE", &[(0, "Flooded"), (1, "Gel"), (2, "AGM")]);

pub static BATTERY_VOLTAGE: LookupTable = LookupTable::pair(
    "BATTERY_VOLTAGE",
    &[
        (0, "6V"),
        (1, "12V"),
        (2, "24V"),
        (3, "32V"),
        (4, "36V"),
        (5, "42V"),
        (6, "48V"),
    ],
);

pub static BATTERY_CHEMISTRY: LookupTable = LookupTable::pair(
    "BATTERY_CHEMISTRY",
    &[(0, "Pb (Lead)"), (1, "Li"), (2, "NiCd"), (3, "ZnO"), (4, "NiMH")],
);

pub static WATER_REFERENCE: LookupTable = LookupTable::pair(
    "WATER_REFERENCE",
    &[
        (0, "Paddle wheel"),
        (1, "Pitot tube"),
        (2, "Doppler"),
        (3, "Correlation (ultra sound)"),
        (4, "Electro Magnetic"),
    ],
);

pub static GNS: LookupTable = LookupTable::pair(
    "GNS",
    &[
        (0, "GPS"),
        (1, "GLONASS"),
        (2, "GPS+GLONASS"),
        (3, "GPS+SBAS/WAAS"),
        (4, "GPS+SBAS/WAAS+GLONASS"),
        (5, "Chayka"),
        (6, "integrated"),
        (7, "surveyed"),
        (8, "Galileo"),
    ],
);

pub static GNS_METHOD: LookupTable = LookupTable::pair(
    "GNS_METHOD",
    &[
        (0, "no GNSS"),
        (1, "GNSS fix"),
        (2, "DGNSS fix"),
        (3, "Precise GNSS"),
        (4, "RTK Fixed Integer"),
        (5, "RTK float"),
        (6, "Estimated (DR) mode"),
        (7, "Manual Input"),
        (8, "Simulate mode"),
    ],
);

pub static GNS_INTEGRITY: LookupTable = LookupTable::pair(
    "GNS_INTEGRITY",
    &[(0, "No integrity checking"), (1, "Safe"), (2, "Caution")],
);

pub static GNSS_MODE: LookupTable = LookupTable::pair("GNSS_MODE", &[(0, "1D"), (1, "2D"), (2, "3D"), (3, "Auto")]);

pub static RANGE_RESIDUAL_MODE: LookupTable = LookupTable::pair(
    "RANGE_RESIDUAL_MODE",
    &[
        (0, "Range residuals were used to calculate data"),
        (1, "Range residuals were calculated after the position"),
    ],
);

pub static SATELLITE_STATUS: LookupTable = LookupTable::pair(
    "SATELLITE_STATUS",
    &[
        (0, "Not tracked"),
        (1, "Tracked"),
        (2, "Used"),
        (3, "Not tracked+Diff"),
        (4, "Tracked+Diff"),
        (5, "Used+Diff"),
    ],
);

pub static RESIDUAL_MODE: LookupTable = LookupTable::pair(
    "RESIDUAL_MODE",
    &[
        (0, "Autonomous"),
        (1, "Differential enhanced"),
        (2, "Estimated"),
        (3, "Simulator"),
        (4, "Manual"),
    ],
);

pub static BEARING_MODE: LookupTable = LookupTable::pair("BEARING_MODE", &[(0, "Great Circle"), (1, "Rhumbline")]);

pub static WIND_REFERENCE: LookupTable = LookupTable::pair(
    "WIND_REFERENCE",
    &[
        (0, "True (ground referenced to North)"),
        (1, "Magnetic (ground referenced to Magnetic North)"),
        (2, "Apparent"),
        (3, "True (boat referenced)"),
        (4, "True (water referenced)"),
    ],
);

pub static TEMPERATURE_SOURCE: LookupTable = LookupTable::pair(
    "TEMPERATURE_SOURCE",
    &[
        (0, "Sea Temperature"),
        (1, "Outside Temperature"),
        (2, "Inside Temperature"),
        (3, "Engine Room Temperature"),
        (4, "Main Cabin Temperature"),
        (5, "Live Well Temperature"),
        (6, "Bait Well Temperature"),
        (7, "Refrigeration Temperature"),
        (8, "Heating System Temperature"),
        (9, "Dew Point Temperature"),
        (10, "Apparent Wind Chill Temperature"),
        (11, "Theoretical Wind Chill Temperature"),
        (12, "Heat Index Temperature"),
        (13, "Freezer Temperature"),
        (14, "Exhaust Gas Temperature"),
        (15, "Shaft Seal Temperature"),
    ],
);

pub static HUMIDITY_SOURCE: LookupTable = LookupTable::pair("HUMIDITY_SOURCE", &[(0, "Inside"), (1, "Outside")]);

pub static PRESSURE_SOURCE: LookupTable = LookupTable::pair(
    "PRESSURE_SOURCE",
    &[
        (0, "Atmospheric"),
        (1, "Water"),
        (2, "Steam"),
        (3, "Compressed Air"),
        (4, "Hydraulic"),
        (5, "Filter"),
        (6, "AltimeterSetting"),
        (7, "Oil"),
        (8, "Fuel"),
    ],
);

pub static AIS_MESSAGE_ID: LookupTable = LookupTable::pair(
    "AIS_MESSAGE_ID",
    &[
        (1, "Scheduled Class A position report"),
        (2, "Assigned scheduled Class A position report"),
        (3, "Interrogated Class A position report"),
        (4, "Base station report"),
        (5, "Static and voyage related data"),
        (6, "Binary addressed message"),
        (7, "Binary acknowledgement"),
        (8, "Binary broadcast message"),
        (9, "Standard SAR aircraft position report"),
        (10, "UTC/date inquiry"),
        (11, "UTC/date response"),
        (12, "Safety related addressed message"),
        (13, "Safety related acknowledgement"),
        (14, "Satety related broadcast message"),
        (15, "Interrogation"),
        (16, "Assignment mode command"),
        (17, "DGNSS broadcast binary message"),
        (18, "Standard Class B position report"),
        (19, "Extended Class B position report"),
        (20, "Data link management message"),
        (21, "ATON report"),
        (22, "Channel management"),
        (23, "Group assignment command"),
        (24, "Static data report"),
        (25, "Single slot binary message"),
        (26, "Multiple slot binary message"),
        (27, "Position report for long range applications"),
    ],
);

pub static REPEAT_INDICATOR: LookupTable = LookupTable::pair(
    "REPEAT_INDICATOR",
    &[
        (0, "Initial"),
        (1, "First retransmission"),
        (2, "Second retransmission"),
        (3, "Final retransmission"),
    ],
);

pub static POSITION_ACCURACY: LookupTable = LookupTable::pair("POSITION_ACCURACY", &[(0, "Low"), (1, "High")]);

pub static RAIM_FLAG: LookupTable = LookupTable::pair("RAIM_FLAG", &[(0, "not in use"), (1, "in use")]);

pub static TIME_STAMP: LookupTable = LookupTable::pair(
    "TIME_STAMP",
    &[
        (60, "Not available"),
        (61, "Manual input mode"),
        (62, "Dead reckoning mode"),
        (63, "Positioning system is inoperative"),
    ],
);

pub static AIS_TRANSCEIVER: LookupTable = LookupTable::pair(
    "AIS_TRANSCEIVER",
    &[
        (0, "Channel A VDL reception"),
        (1, "Channel B VDL reception"),
        (2, "Channel A VDL transmission"),
        (3, "Channel B VDL transmission"),
        (4, "Own information not broadcast"),
        (5, "Reserved"),
    ],
);

pub static NAV_STATUS: LookupTable = LookupTable::pair(
    "NAV_STATUS",
    &[
        (0, "Under way using engine"),
        (1, "At anchor"),
        (2, "Not under command"),
        (3, "Restricted manoeuverability"),
        (4, "Constrained by her draught"),
        (5, "Moored"),
        (6, "Aground"),
        (7, "Engaged in Fishing"),
        (8, "Under way sailing"),
        (9, "Hazardous material - High Speed"),
        (10, "Hazardous material - Wing in Ground"),
        (11, "Power-driven vessel towing astern"),
        (12, "Power-driven vessel pushing ahead or towing alongside"),
        (14, "AIS-SART"),
    ],
);

pub static AIS_SPECIAL_MANEUVER: LookupTable = LookupTable::pair(
    "AIS_SPECIAL_MANEUVER",
    &[
        (0, "Not available"),
        (1, "Not engaged in special maneuver"),
        (2, "Engaged in special maneuver"),
    ],
);

pub static AIS_TYPE: LookupTable = LookupTable::pair("AIS_TYPE", &[(0, "SOTDMA"), (1, "CS")]);

pub static AIS_BAND: LookupTable = LookupTable::pair(
    "AIS_BAND",
    &[(0, "Top 525 kHz of marine band"), (1, "Entire marine band")],
);

pub static AIS_MODE: LookupTable = LookupTable::pair("AIS_MODE", &[(0, "Autonomous"), (1, "Assigned")]);

pub static AIS_COMMUNICATION_STATE: LookupTable =
    LookupTable::pair("AIS_COMMUNICATION_STATE", &[(0, "SOTDMA"), (1, "ITDMA")]);

pub static AIS_VERSION: LookupTable = LookupTable::pair(
    "AIS_VERSION",
    &[
        (0, "ITU-R M.1371-1"),
        (1, "ITU-R M.1371-3"),
        (2, "ITU-R M.1371-5"),
        (3, "ITU-R M.1371 future"),
    ],
);

pub static POSITION_FIX_DEVICE: LookupTable = LookupTable::pair(
    "POSITION_FIX_DEVICE",
    &[
        (0, "Default: undefined"),
        (1, "GPS"),
        (2, "GLONASS"),
        (3, "Combined GPS/GLONASS"),
        (4, "Loran-C"),
        (5, "Chayka"),
        (6, "Integrated navigation system"),
        (7, "Surveyed"),
        (8, "Galileo"),
        (15, "Internal GNSS"),
    ],
);

pub static SHIP_TYPE: LookupTable = LookupTable::pair(
    "SHIP_TYPE",
    &[
        (0, "unavailable"),
        (20, "Wing In Ground"),
        (29, "Wing In Ground (no other information)"),
        (30, "Fishing"),
        (31, "Towing"),
        (32, "Towing exceeds 200m or wider than 25m"),
        (33, "Engaged in dredging or underwater operations"),
        (34, "Engaged in diving operations"),
        (35, "Engaged in military operations"),
        (36, "Sailing"),
        (37, "Pleasure"),
        (40, "High speed craft"),
        (49, "High speed craft (no additional information)"),
        (50, "Pilot vessel"),
        (51, "SAR"),
        (52, "Tug"),
        (53, "Port tender"),
        (54, "Anti-pollution"),
        (55, "Law enforcement"),
        (56, "Spare"),
        (57, "Spare #2"),
        (58, "Medical"),
        (59, "RR Resolution No.18"),
        (60, "Passenger ship"),
        (69, "Passenger ship (no additional information)"),
        (70, "Cargo ship"),
        (71, "Cargo ship (hazard cat A)"),
        (72, "Cargo ship (hazard cat B)"),
        (73, "Cargo ship (hazard cat C)"),
        (74, "Cargo ship (hazard cat D)"),
        (79, "Cargo ship (no additional information)"),
        (80, "Tanker"),
        (81, "Tanker (hazard cat A)"),
        (82, "Tanker (hazard cat B)"),
        (83, "Tanker (hazard cat C)"),
        (84, "Tanker (hazard cat D)"),
        (89, "Tanker (no additional information)"),
        (90, "Other"),
        (91, "Other (hazard cat A)"),
        (92, "Other (hazard cat B)"),
        (93, "Other (hazard cat C)"),
        (94, "Other (hazard cat D)"),
        (99, "Other (no additional information)"),
    ],
);

pub static AIRMAR_BOOT_STATE: LookupTable = LookupTable::pair(
    "AIRMAR_BOOT_STATE",
    &[
        (0, "in Startup Monitor"),
        (1, "running Bootloader"),
        (2, "running Application"),
    ],
);

pub static AIRMAR_DEPTH_QUALITY_FACTOR: LookupTable =
    LookupTable::pair("AIRMAR_DEPTH_QUALITY_FACTOR", &[(0, "No Depth Lock")]);

pub static AIRMAR_FORMAT_CODE: LookupTable =
    LookupTable::pair("AIRMAR_FORMAT_CODE", &[(1, "Format code 1")]);

pub static AIRMAR_ACCESS_LEVEL: LookupTable = LookupTable::pair(
    "AIRMAR_ACCESS_LEVEL",
    &[
        (0, "Locked"),
        (1, "unlocked level 1"),
        (2, "unlocked level 2"),
    ],
);

pub static AC_LINE: LookupTable = LookupTable::pair(
    "AC_LINE",
    &[
        (0, "Line 1"),
        (1, "Line 2"),
        (2, "Line 3"),
    ],
);

pub static ACCEPTABILITY: LookupTable = LookupTable::pair(
    "ACCEPTABILITY",
    &[
        (0, "Bad Level"),
        (1, "Bad Frequency"),
        (2, "Being Qualified"),
        (3, "Good"),
    ],
);

pub static WAVEFORM: LookupTable = LookupTable::pair(
    "WAVEFORM",
    &[
        (0, "Sine Wave"),
        (1, "Modified Sine Wave"),
        (6, "Error"),
        (7, "Data Not Available"),
    ],
);

pub static TRACK_STATUS: LookupTable = LookupTable::pair(
    "TRACK_STATUS",
    &[
        (0, "Cancelled"),
        (1, "Acquiring"),
        (2, "Tracking"),
        (3, "Lost"),
    ],
);

pub static TARGET_ACQUISITION: LookupTable = LookupTable::pair(
    "TARGET_ACQUISITION",
    &[
        (0, "Manual"),
        (1, "Automatic"),
    ],
);

pub static MARK_TYPE: LookupTable = LookupTable::pair(
    "MARK_TYPE",
    &[
        (0, "Collision"),
        (1, "Turning point"),
        (2, "Reference"),
        (3, "Wheelover"),
        (4, "Waypoint"),
    ],
);

pub static GNSS_MODE_DESIRED: LookupTable = LookupTable::pair(
    "GNSS_MODE_DESIRED",
    &[
        (0, "1D"),
        (1, "2D"),
        (2, "3D"),
        (3, "Auto"),
        (4, "Reserved"),
        (5, "Reserved"),
        (6, "Error"),
    ],
);

pub static DGNSS_MODE_DESIRED: LookupTable = LookupTable::pair(
    "DGNSS_MODE_DESIRED",
    &[
        (0, "no SBAS"),
        (1, "SBAS"),
        (3, "SBAS"),
    ],
);

pub static USE_ANTENNA_ALTITUDE_FOR_2D_MODE: LookupTable = LookupTable::pair(
    "USE_ANTENNA_ALTITUDE_FOR_2D_MODE",
    &[
        (0, "use last 3D height"),
        (1, "Use antenna altitude"),
    ],
);

pub static TIDE_TENDENCY: LookupTable = LookupTable::pair(
    "TIDE_TENDENCY",
    &[
        (0, "Falling"),
        (1, "Rising"),
    ],
);

pub static SIMNET_TANK_TYPE: LookupTable = LookupTable::pair(
    "SIMNET_TANK_TYPE",
    &[
        (0, "Fuel"),
        (1, "Water"),
        (2, "Gray water"),
        (3, "Live well"),
        (4, "Oil"),
        (5, "Black water"),
    ],
);

pub static SIMNET_BACKLIGHT: LookupTable = LookupTable::pair(
    "SIMNET_BACKLIGHT",
    &[
        (1, "Day Mode"),
        (4, "Night Mode"),
        (11, "Level 1"),
        (22, "Level 2"),
        (33, "Level 3"),
        (44, "Level 4"),
        (55, "Level 5"),
        (66, "Level 6"),
        (77, "Level 7"),
        (88, "Level 8"),
        (99, "Level 9"),
    ],
);

pub static AIRMAR_CONTROL: LookupTable = LookupTable::pair(
    "AIRMAR_CONTROL",
    &[
        (0, "Report previous values"),
        (1, "Generate new values"),
    ],
);

pub static AIRMAR_TEST_ID: LookupTable = LookupTable::pair(
    "AIRMAR_TEST_ID",
    &[
        (1, "Format Code"),
        (2, "Factory EEPROM"),
        (3, "User EEPROM"),
        (4, "Water Temp Sensor"),
        (5, "Sonar Transceiver"),
        (6, "Speed sensor"),
        (7, "Internal temperature sensor"),
        (8, "Battery voltage sensor"),
    ],
);

pub static AIRMAR_TEST_RESULT: LookupTable =
    LookupTable::pair("AIRMAR_TEST_RESULT", &[(0, "Pass")]);

pub static AIRMAR_CALIBRATE_FUNCTION: LookupTable = LookupTable::pair(
    "AIRMAR_CALIBRATE_FUNCTION",
    &[
        (0, "Normal/cancel calibration"),
        (1, "Enter calibration mode"),
        (2, "Reset calibration to 0"),
        (3, "Verify"),
        (4, "Reset compass to defaults"),
        (5, "Reset damping to defaults"),
    ],
);

pub static AIRMAR_CALIBRATION_STATUS: LookupTable = LookupTable::pair(
    "AIRMAR_CALIBRATION_STATUS",
    &[
        (0, "Queried"),
        (1, "Passed"),
        (2, "Failed - timeout"),
        (3, "Failed - tilt error"),
        (4, "Failed - other"),
        (5, "In progress"),
    ],
);

pub static AIRMAR_COG_SUBSTITUTION: LookupTable =
    LookupTable::pair("AIRMAR_COG_SUBSTITUTION", &[(0, "Use HDG only"), (1, "Allow COG to replace HDG")]);

pub static AIRMAR_TEMPERATURE_INSTANCE: LookupTable = LookupTable::pair(
    "AIRMAR_TEMPERATURE_INSTANCE",
    &[
        (0, "Device Sensor"),
        (1, "Onboard Water Sensor"),
        (2, "Optional Water Sensor"),
    ],
);

pub static AIRMAR_FILTER_TYPE: LookupTable =
    LookupTable::pair("AIRMAR_FILTER_TYPE", &[(0, "no filter"), (1, "basic IIR filter")]);

pub static AIRMAR_TRANSMISSION_INTERVAL: LookupTable =
    LookupTable::pair("AIRMAR_TRANSMISSION_INTERVAL", &[(0, "Measure Interval"), (1, "Requested by user")]);

pub static SONICHUB_CONTROL: LookupTable =
    LookupTable::pair("SONICHUB_CONTROL", &[(0, "Set"), (128, "Ack")]);

pub static SONICHUB_TUNING: LookupTable =
    LookupTable::pair("SONICHUB_TUNING", &[(1, "Seeking up"), (2, "Tuned"), (3, "Seeking down")]);

pub static SONICHUB_SOURCE: LookupTable = LookupTable::pair(
    "SONICHUB_SOURCE",
    &[
        (0, "AM"),
        (1, "FM"),
        (2, "iPod"),
        (3, "USB"),
        (4, "AUX"),
        (5, "AUX 2"),
        (6, "Mic"),
    ],
);

pub static SONICHUB_MUTE: LookupTable =
    LookupTable::pair("SONICHUB_MUTE", &[(1, "Mute on"), (2, "Mute off")]);

pub static SONICHUB_PLAYLIST: LookupTable =
    LookupTable::pair("SONICHUB_PLAYLIST", &[(1, "Report"), (4, "Next Song"), (6, "Previous Song")]);

pub static SONICHUB_ZONE: LookupTable =
    LookupTable::pair("SONICHUB_ZONE", &[(0, "Zone 1"), (1, "Zone 2"), (2, "Zone 3")]);

/// Every table, in explain order
pub static LOOKUP_TABLES: &[&LookupTable] = &[
    &INDUSTRY_CODE,
    &MANUFACTURER_CODE,
    &DEVICE_CLASS,
    &DEVICE_FUNCTION,
    &ISO_CONTROL,
    &ISO_COMMAND,
    &GROUP_FUNCTION,
    &PGN_ERROR_CODE,
    &TRANSMISSION_INTERVAL,
    &PARAMETER_FIELD,
    &PRIORITY,
    &PGN_LIST_FUNCTION,
    &CONTROLLER_STATE,
    &EQUIPMENT_STATUS,
    &CERTIFICATION_LEVEL,
    &SYSTEM_TIME,
    &DIRECTION_REFERENCE,
    &YES_NO,
    &OFF_ON,
    &AVAILABLE,
    &POWER_FACTOR,
    &STEERING_MODE,
    &TURN_MODE,
    &DIRECTION_RUDDER,
    &MAGNETIC_VARIATION,
    &ENGINE_INSTANCE,
    &GEAR_STATUS,
    &ENGINE_STATUS_1,
    &ENGINE_STATUS_2,
    &TRANSMISSION_STATUS,
    &TANK_TYPE,
    &DC_SOURCE,
    &CHARGER_STATE,
    &CHARGER_MODE,
    &INVERTER_STATE,
    &BATTERY_TYPE,
    &BATTERY_VOLTAGE,
    &BATTERY_CHEMISTRY,
    &WATER_REFERENCE,
    &GNS,
    &GNS_METHOD,
    &GNS_INTEGRITY,
    &GNSS_MODE,
    &RANGE_RESIDUAL_MODE,
    &SATELLITE_STATUS,
    &RESIDUAL_MODE,
    &BEARING_MODE,
    &WIND_REFERENCE,
    &TEMPERATURE_SOURCE,
    &HUMIDITY_SOURCE,
    &PRESSURE_SOURCE,
    &AIS_MESSAGE_ID,
    &REPEAT_INDICATOR,
    &POSITION_ACCURACY,
    &RAIM_FLAG,
    &TIME_STAMP,
    &AIS_TRANSCEIVER,
    &NAV_STATUS,
    &AIS_SPECIAL_MANEUVER,
    &AIS_TYPE,
    &AIS_BAND,
    &AIS_MODE,
    &AIS_COMMUNICATION_STATE,
    &AIS_VERSION,
    &POSITION_FIX_DEVICE,
    &SHIP_TYPE,
    &AIRMAR_BOOT_STATE,
    &AIRMAR_DEPTH_QUALITY_FACTOR,
    &AIRMAR_FORMAT_CODE,
    &AIRMAR_ACCESS_LEVEL,
    &AC_LINE,
    &ACCEPTABILITY,
    &WAVEFORM,
    &TRACK_STATUS,
    &TARGET_ACQUISITION,
    &MARK_TYPE,
    &GNSS_MODE_DESIRED,
    &DGNSS_MODE_DESIRED,
    &USE_ANTENNA_ALTITUDE_FOR_2D_MODE,
    &TIDE_TENDENCY,
    &SIMNET_TANK_TYPE,
    &SIMNET_BACKLIGHT,
    &AIRMAR_CONTROL,
    &AIRMAR_TEST_ID,
    &AIRMAR_TEST_RESULT,
    &AIRMAR_CALIBRATE_FUNCTION,
    &AIRMAR_CALIBRATION_STATUS,
    &AIRMAR_COG_SUBSTITUTION,
    &AIRMAR_TEMPERATURE_INSTANCE,
    &AIRMAR_FILTER_TYPE,
    &AIRMAR_TRANSMISSION_INTERVAL,
    &SONICHUB_CONTROL,
    &SONICHUB_TUNING,
    &SONICHUB_SOURCE,
    &SONICHUB_MUTE,
    &SONICHUB_PLAYLIST,
    &SONICHUB_ZONE,
];
